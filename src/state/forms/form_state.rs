//! Search and notice form structs

use super::field::{FormField, SelectOption};
use crate::notice::{Notice, NoticeSearchCondition};
use crate::validation::{NoticeFields, SearchFields};
use chrono::NaiveDate;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Search form shown above the notice list
#[derive(Debug, Clone)]
pub struct NoticeSearchForm {
    pub title: FormField,
    pub category: FormField,
    pub post_date: FormField,
    pub from: FormField,
    pub to: FormField,
    pub active_field_index: usize,
}

impl NoticeSearchForm {
    pub fn new() -> Self {
        Self {
            title: FormField::text("title", "Notice title"),
            category: FormField::select("category", "Category", SelectOption::categories("All")),
            post_date: FormField::date("postDate", "Post date"),
            from: FormField::date("from", "Applicable from"),
            to: FormField::date("to", "Applicable to"),
            active_field_index: 0,
        }
    }

    pub fn to_input(&self) -> SearchFields<'_> {
        SearchFields {
            title: self.title.as_input(),
            post_date: self.post_date.as_input(),
            from: self.from.as_input(),
            to: self.to.as_input(),
        }
    }

    /// Build the service condition. Blank or unparseable values do not filter.
    pub fn to_condition(&self) -> NoticeSearchCondition {
        NoticeSearchCondition {
            title: blank_to_none(self.title.as_text()),
            category_code: blank_to_none(self.category.as_text()),
            post_date: parse_date(self.post_date.as_text()),
            effective_from: parse_date(self.from.as_text()),
            effective_to: parse_date(self.to.as_text()),
        }
    }

    /// Whether any filter has been entered
    pub fn has_criteria(&self) -> bool {
        [
            &self.title,
            &self.category,
            &self.post_date,
            &self.from,
            &self.to,
        ]
        .iter()
        .any(|f| !f.as_text().trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for NoticeSearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NoticeSearchForm {
    fn field_count(&self) -> usize {
        5
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.title,
            1 => &mut self.category,
            2 => &mut self.post_date,
            3 => &mut self.from,
            _ => &mut self.to,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.category),
            2 => Some(&self.post_date),
            3 => Some(&self.from),
            4 => Some(&self.to),
            _ => None,
        }
    }
}

/// Whether the notice form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u64),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "New Notice",
            Self::Edit(_) => "Edit Notice",
        }
    }
}

/// Notice create/edit form
#[derive(Debug, Clone)]
pub struct NoticeForm {
    pub mode: FormMode,
    pub title: FormField,
    pub category: FormField,
    pub post_date: FormField,
    pub start_date: FormField,
    pub end_date: FormField,
    pub content: FormField,
    pub active_field_index: usize,
}

impl NoticeForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            title: FormField::text("title", "Title"),
            category: FormField::select(
                "category",
                "Category",
                SelectOption::categories("(select)"),
            ),
            post_date: FormField::date("postDate", "Post date (YYYY-MM-DD)"),
            start_date: FormField::date("startDate", "Start date (YYYY-MM-DD)"),
            end_date: FormField::date("endDate", "End date (YYYY-MM-DD)"),
            content: FormField::multiline("content", "Content"),
            active_field_index: 0,
        }
    }

    pub fn from_notice(notice: &Notice) -> Self {
        let mut form = Self::new();
        form.mode = match notice.id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        };
        form.title.set_text(notice.title.clone());
        form.category.set_text(notice.category_code.clone());
        form.post_date.set_text(notice.post_date.to_string());
        form.start_date.set_text(notice.start_date.to_string());
        form.end_date.set_text(notice.end_date.to_string());
        form.content.set_text(notice.content.clone());
        form
    }

    pub fn to_input(&self) -> NoticeFields<'_> {
        NoticeFields {
            title: self.title.as_input(),
            category: self.category.as_input(),
            post_date: self.post_date.as_input(),
            start_date: self.start_date.as_input(),
            end_date: self.end_date.as_input(),
            content: self.content.as_input(),
        }
    }

    /// Build the record to submit. Returns `None` if a date does not parse,
    /// which cannot happen once the form has passed validation.
    pub fn to_notice(&self) -> Option<Notice> {
        Some(Notice {
            id: match self.mode {
                FormMode::Create => None,
                FormMode::Edit(id) => Some(id),
            },
            title: self.title.as_text().trim().to_string(),
            category_code: self.category.as_text().to_string(),
            post_date: parse_date(self.post_date.as_text())?,
            start_date: parse_date(self.start_date.as_text())?,
            end_date: parse_date(self.end_date.as_text())?,
            content: self.content.as_text().to_string(),
            created_at: None,
            updated_at: None,
        })
    }
}

impl Default for NoticeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NoticeForm {
    fn field_count(&self) -> usize {
        6
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.title,
            1 => &mut self.category,
            2 => &mut self.post_date,
            3 => &mut self.start_date,
            4 => &mut self.end_date,
            _ => &mut self.content,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.category),
            2 => Some(&self.post_date),
            3 => Some(&self.start_date),
            4 => Some(&self.end_date),
            5 => Some(&self.content),
            _ => None,
        }
    }
}
