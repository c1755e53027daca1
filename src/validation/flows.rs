//! Validation flows for the two notice forms

use super::error::ValidationError;
use super::rules::{
    date_field_check, date_range_check, max_length_check, optional_date_field_check,
    required_check, InputSignal,
};
use crate::notice::NoticeCategory;

/// Maximum title length, shared by the search filter and the notice record
pub const TITLE_MAX_LENGTH: usize = 100;

/// Snapshot of one field as seen by the validator
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldInput<'a> {
    pub value: &'a str,
    pub signal: InputSignal,
}

impl<'a> FieldInput<'a> {
    /// A plain text value; the signal is derived from emptiness
    pub fn text(value: &'a str) -> Self {
        let signal = if value.trim().is_empty() {
            InputSignal::Empty
        } else {
            InputSignal::WellFormed
        };
        Self { value, signal }
    }

    pub fn with_signal(value: &'a str, signal: InputSignal) -> Self {
        Self { value, signal }
    }

    fn trimmed(&self) -> &'a str {
        self.value.trim()
    }
}

/// Search form fields
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFields<'a> {
    pub title: FieldInput<'a>,
    pub post_date: FieldInput<'a>,
    pub from: FieldInput<'a>,
    pub to: FieldInput<'a>,
}

/// Notice create/edit form fields
#[derive(Debug, Clone, Copy, Default)]
pub struct NoticeFields<'a> {
    pub title: FieldInput<'a>,
    pub category: FieldInput<'a>,
    pub post_date: FieldInput<'a>,
    pub start_date: FieldInput<'a>,
    pub end_date: FieldInput<'a>,
    pub content: FieldInput<'a>,
}

/// Validate the search form.
///
/// Every filter is optional. The from/to range is only compared when no
/// other check has failed.
pub fn validate_search_form(fields: &SearchFields) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(max_length_check(
        fields.title.trimmed(),
        TITLE_MAX_LENGTH,
        "Notice title",
    ));

    for (field, label) in [
        (&fields.post_date, "Post date"),
        (&fields.from, "Applicable period (from)"),
        (&fields.to, "Applicable period (to)"),
    ] {
        errors.extend(optional_date_field_check(field.value, field.signal, label));
    }

    if errors.is_empty() {
        errors.extend(date_range_check(fields.from.trimmed(), fields.to.trimmed()));
    }

    if !errors.is_empty() {
        tracing::debug!("Search form rejected with {} error(s)", errors.len());
    }
    errors
}

/// Validate the notice create/edit form.
///
/// The start/end range is compared only when the start and end dates passed
/// their own checks; errors in any other field do not suppress it.
pub fn validate_notice_form(fields: &NoticeFields) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let title = fields.title.trimmed();
    if let Some(err) = required_check(title, "Title")
        .or_else(|| max_length_check(title, TITLE_MAX_LENGTH, "Title"))
    {
        errors.push(err);
    }

    if NoticeCategory::from_code(fields.category.trimmed()).is_none() {
        errors.push(ValidationError::missing_selection("Category"));
    }

    errors.extend(date_field_check(
        fields.post_date.value,
        fields.post_date.signal,
        "Post date",
    ));
    let start_error = date_field_check(
        fields.start_date.value,
        fields.start_date.signal,
        "Start date",
    );
    let end_error = date_field_check(fields.end_date.value, fields.end_date.signal, "End date");
    let period_valid = start_error.is_none() && end_error.is_none();
    errors.extend(start_error);
    errors.extend(end_error);

    if period_valid {
        errors.extend(date_range_check(
            fields.start_date.trimmed(),
            fields.end_date.trimmed(),
        ));
    }

    errors.extend(required_check(fields.content.value, "Content"));

    if !errors.is_empty() {
        tracing::debug!("Notice form rejected with {} error(s)", errors.len());
    }
    errors
}
