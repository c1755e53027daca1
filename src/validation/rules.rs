//! Individual validation checks

use super::error::ValidationError;
use chrono::NaiveDate;

/// What a field adapter knows about the raw input behind a value.
///
/// Date inputs can hold text that is not a date at all; in that case the
/// adapter reports `Malformed` and hands over an empty value, the same way a
/// browser date input reports "bad input".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSignal {
    #[default]
    Empty,
    Malformed,
    WellFormed,
}

impl InputSignal {
    pub fn is_malformed(self) -> bool {
        matches!(self, Self::Malformed)
    }
}

/// Fails when the trimmed value is empty
pub fn required_check(value: &str, label: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::missing(label))
    } else {
        None
    }
}

/// Fails when the value has more than `max_len` characters.
/// Empty values always pass; required-ness is checked separately.
pub fn max_length_check(value: &str, max_len: usize, label: &str) -> Option<ValidationError> {
    if !value.is_empty() && value.chars().count() > max_len {
        Some(ValidationError::too_long(label, max_len))
    } else {
        None
    }
}

/// Parse a strict `YYYY-MM-DD` string into a calendar date
fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year: i32 = value[0..4].parse().ok()?;
    // two-digit years are not accepted as calendar years
    if year < 100 {
        return None;
    }
    let month: u32 = value[5..7].parse().ok()?;
    let day: u32 = value[8..10].parse().ok()?;

    // from_ymd_opt never rolls over, so month 13 or Feb 30 come back as None
    NaiveDate::from_ymd_opt(year, month, day)
}

/// True when the value is a zero-padded `YYYY-MM-DD` naming a real date
pub fn date_format_check(value: &str) -> bool {
    parse_iso_date(value).is_some()
}

/// Required date field.
///
/// An empty value is "invalid date" when the raw input was malformed and
/// "required" otherwise; a non-empty value must pass [`date_format_check`].
pub fn date_field_check(value: &str, signal: InputSignal, label: &str) -> Option<ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        if signal.is_malformed() {
            return Some(ValidationError::invalid_date(label));
        }
        return Some(ValidationError::missing(label));
    }

    if !date_format_check(value) {
        return Some(ValidationError::invalid_date(label));
    }

    None
}

/// Optional date filter used by the search form. Empty input is accepted.
pub fn optional_date_field_check(
    value: &str,
    signal: InputSignal,
    label: &str,
) -> Option<ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return signal
            .is_malformed()
            .then(|| ValidationError::invalid_date(label));
    }

    if !date_format_check(value) {
        return Some(ValidationError::pattern_mismatch(label));
    }

    None
}

/// Fails when both values are valid dates and start is after end.
/// Returns `None` without comparing if either side is empty or malformed.
pub fn date_range_check(start: &str, end: &str) -> Option<ValidationError> {
    let start = parse_iso_date(start.trim())?;
    let end = parse_iso_date(end.trim())?;

    (start > end).then_some(ValidationError::InvalidDateRange)
}
