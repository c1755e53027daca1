//! Application state definitions

use super::dialog::DialogController;
use super::forms::{NoticeForm, NoticeSearchForm};
use crate::notice::{Notice, NoticeSearchCondition, Page, Paging};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    NoticeForm,
}

/// Focus within the list view (search form vs result rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    #[default]
    SearchForm,
    Results,
}

impl ListFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::SearchForm => Self::Results,
            Self::Results => Self::SearchForm,
        };
    }
}

/// The search that produced the current result list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedSearch {
    pub condition: NoticeSearchCondition,
    pub paging: Paging,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub list_focus: ListFocus,
    pub search_form: NoticeSearchForm,
    /// Last submitted search, re-run after a successful action
    pub submitted_search: Option<SubmittedSearch>,
    pub results: Page<Notice>,
    /// Selected result row; `None` until the user picks one
    pub selected_index: Option<usize>,
    pub notice_form: Option<NoticeForm>,
    pub dialogs: DialogController,
    pub status_message: Option<String>,
    /// Mark malformed fields inline in addition to the error dialog
    pub show_inline_feedback: bool,
}

impl AppState {
    pub fn has_results(&self) -> bool {
        self.submitted_search.is_some()
    }

    pub fn selected_notice(&self) -> Option<&Notice> {
        self.selected_index.and_then(|i| self.results.items.get(i))
    }

    pub fn move_selection_down(&mut self) {
        let len = self.results.items.len();
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn move_selection_up(&mut self) {
        if self.results.items.is_empty() {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = None;
    }

    /// Replace the result page, dropping a selection that no longer exists
    pub fn set_results(&mut self, page: Page<Notice>) {
        if self
            .selected_index
            .is_some_and(|i| i >= page.items.len())
        {
            self.selected_index = None;
        }
        self.results = page;
    }

    pub fn clear_form(&mut self) {
        self.notice_form = None;
    }
}
