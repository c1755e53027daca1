//! Validation error taxonomy

use thiserror::Error;

/// Heading of the error dialog for form validation failures
pub const INPUT_ERROR_HEADING: &str = "Input Error";

/// Heading of the error dialog when an action needs a selected row
pub const SELECTION_ERROR_HEADING: &str = "Selection Error";

/// A user-facing validation failure. The `Display` text is the message shown
/// in the error dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter {label}.")]
    MissingRequiredField { label: String },

    /// Required field backed by a fixed set of options
    #[error("Please select {label}.")]
    MissingSelection { label: String },

    #[error("{label} must be {max} characters or fewer.")]
    ValueTooLong { label: String, max: usize },

    #[error("Please enter a valid date for {label}.")]
    InvalidDateFormat { label: String },

    /// Optional date filter that was typed but does not look like a date
    #[error("{label} must be a date in YYYY-MM-DD format.")]
    DatePatternMismatch { label: String },

    #[error("The applicable period must start on or before its end date.")]
    InvalidDateRange,

    #[error("Please select a row.")]
    NoRowSelected,
}

impl ValidationError {
    pub fn missing(label: &str) -> Self {
        Self::MissingRequiredField {
            label: label.to_string(),
        }
    }

    pub fn missing_selection(label: &str) -> Self {
        Self::MissingSelection {
            label: label.to_string(),
        }
    }

    pub fn too_long(label: &str, max: usize) -> Self {
        Self::ValueTooLong {
            label: label.to_string(),
            max,
        }
    }

    pub fn invalid_date(label: &str) -> Self {
        Self::InvalidDateFormat {
            label: label.to_string(),
        }
    }

    pub fn pattern_mismatch(label: &str) -> Self {
        Self::DatePatternMismatch {
            label: label.to_string(),
        }
    }
}
