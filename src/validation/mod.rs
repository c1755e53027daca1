//! Client-side validation for the search and notice forms
//!
//! Checks are pure functions returning `Option<ValidationError>`; the flows in
//! `flows` compose them in a fixed order and collect every failure so the
//! whole list can be shown in one error dialog.

mod error;
mod flows;
mod rules;

pub use error::{ValidationError, INPUT_ERROR_HEADING, SELECTION_ERROR_HEADING};
pub use flows::{
    validate_notice_form, validate_search_form, FieldInput, NoticeFields, SearchFields,
};
pub use rules::InputSignal;

/// Render a list of validation errors as dialog lines
pub fn messages(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
