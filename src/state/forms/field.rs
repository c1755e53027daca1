//! Form field value objects

use crate::notice::NoticeCategory;
use crate::validation::{FieldInput, InputSignal};

/// One choice of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    /// Category options, led by a blank choice with the given label
    pub fn categories(blank_label: &str) -> Vec<Self> {
        std::iter::once(Self::new("", blank_label))
            .chain(
                NoticeCategory::ALL
                    .iter()
                    .map(|c| Self::new(c.code(), c.label())),
            )
            .collect()
    }
}

/// How a field is edited and what its raw text means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Free text that should hold a `YYYY-MM-DD` date
    Date,
    Select(Vec<SelectOption>),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn multiline(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Multiline)
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    /// Push a character to the field value (ignored by select fields)
    pub fn push_char(&mut self, c: char) {
        if !self.is_select() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if !self.is_select() {
            self.value.pop();
        }
    }

    /// Move a select field to its next option (wraps around)
    pub fn next_option(&mut self) {
        self.step_option(1);
    }

    /// Move a select field to its previous option (wraps around)
    pub fn prev_option(&mut self) {
        self.step_option(-1);
    }

    fn step_option(&mut self, delta: isize) {
        let FieldKind::Select(options) = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let len = options.len() as isize;
        let current = options
            .iter()
            .position(|o| o.value == self.value)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.value = options[next].value.clone();
    }

    /// Classify the raw input.
    ///
    /// Date fields holding characters that can never be part of a date are
    /// `Malformed`; everything else is `Empty` or `WellFormed`.
    pub fn input_signal(&self) -> InputSignal {
        let raw = self.value.trim();
        if raw.is_empty() {
            return InputSignal::Empty;
        }
        match self.kind {
            FieldKind::Date if !raw.chars().all(|c| c.is_ascii_digit() || c == '-') => {
                InputSignal::Malformed
            }
            _ => InputSignal::WellFormed,
        }
    }

    /// The value handed to validation. Malformed date input is reported as
    /// an empty value alongside the `Malformed` signal.
    pub fn as_input(&self) -> FieldInput<'_> {
        match self.input_signal() {
            InputSignal::Malformed => FieldInput::with_signal("", InputSignal::Malformed),
            _ => FieldInput::text(&self.value),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Select(options) => options
                .iter()
                .find(|o| o.value == self.value)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| self.value.clone()),
            _ => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mut field: FormField, value: &str) -> FormField {
        field.set_text(value.to_string());
        field
    }

    #[test]
    fn test_text_push_and_pop() {
        let mut field = FormField::text("title", "Title");
        field.push_char('h');
        field.push_char('i');
        assert_eq!(field.as_text(), "hi");
        field.pop_char();
        assert_eq!(field.as_text(), "h");
        field.pop_char();
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_select_ignores_typing() {
        let mut field = FormField::select("category", "Category", SelectOption::categories("All"));
        field.push_char('x');
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_select_cycles_options() {
        let mut field = FormField::select("category", "Category", SelectOption::categories("All"));
        assert_eq!(field.display_value(), "All");
        field.next_option();
        assert_eq!(field.as_text(), "0");
        assert_eq!(field.display_value(), "Information");
        field.next_option();
        assert_eq!(field.as_text(), "1");
        field.next_option();
        assert_eq!(field.as_text(), "");
        field.prev_option();
        assert_eq!(field.as_text(), "1");
    }

    mod input_signal {
        use super::*;

        #[test]
        fn test_empty_date() {
            let field = filled(FormField::date("postDate", "Post date"), "  ");
            assert_eq!(field.input_signal(), InputSignal::Empty);
        }

        #[test]
        fn test_partial_date_is_well_formed() {
            let field = filled(FormField::date("postDate", "Post date"), "2024-1");
            assert_eq!(field.input_signal(), InputSignal::WellFormed);
            assert_eq!(field.as_input().value, "2024-1");
        }

        #[test]
        fn test_letters_in_date_are_malformed() {
            let field = filled(FormField::date("postDate", "Post date"), "2024-0a-01");
            assert_eq!(field.input_signal(), InputSignal::Malformed);
            let input = field.as_input();
            assert_eq!(input.value, "");
            assert_eq!(input.signal, InputSignal::Malformed);
        }

        #[test]
        fn test_letters_in_text_are_well_formed() {
            let field = filled(FormField::text("title", "Title"), "abc");
            assert_eq!(field.input_signal(), InputSignal::WellFormed);
        }
    }
}
