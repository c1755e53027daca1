//! Application state and core logic

use crate::config::TuiConfig;
use crate::notice::{InMemoryNoticeService, NoticeServiceTrait, Paging};
use crate::state::{
    AppState, Form, FormMode, ListFocus, NoticeForm, PendingAction, RerunSearch,
    SubmittedSearch, View,
};
use crate::validation::{validate_notice_form, validate_search_form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Message shown after a create, update or delete succeeds
pub const MSG_PROCESS_COMPLETED: &str = "Process completed.";

/// Heading of the error dialog for service failures
const SERVICE_ERROR_HEADING: &str = "Error";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Notice service that receives submitted forms
    service: Box<dyn NoticeServiceTrait>,
    /// Results per page
    page_size: usize,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the in-memory notice store
    pub fn new(config: &TuiConfig) -> Self {
        let service = if config.seed_demo_data() {
            InMemoryNoticeService::with_demo_data()
        } else {
            InMemoryNoticeService::new()
        };
        Self::with_service(Box::new(service), config)
    }

    pub fn with_service(service: Box<dyn NoticeServiceTrait>, config: &TuiConfig) -> Self {
        let state = AppState {
            show_inline_feedback: !config.suppress_native_feedback(),
            ..Default::default()
        };
        Self {
            state,
            service,
            page_size: config.page_size(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Dialogs are modal; the error dialog sits on top of the others
        if self.state.dialogs.is_error_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dialogs.close_error();
            }
            return Ok(());
        }

        if self.state.dialogs.is_confirm_visible() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.submit_armed_action().await?,
                KeyCode::Char('n') | KeyCode::Esc => self.state.dialogs.close_confirm(),
                _ => {}
            }
            return Ok(());
        }

        if self.state.dialogs.is_success_visible() {
            match key.code {
                KeyCode::Enter => {
                    let rerun = self.state.dialogs.close_success_and_rerun();
                    self.rerun_search(rerun).await?;
                }
                KeyCode::Esc => self.state.dialogs.close_success(),
                _ => {}
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::List => self.handle_list_key(key).await?,
            View::NoticeForm => self.handle_notice_form_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys in the list view
    async fn handle_list_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.list_focus {
            ListFocus::SearchForm => self.handle_search_form_key(key).await,
            ListFocus::Results => self.handle_results_key(key).await,
        }
    }

    /// Handle keys while the search form has focus
    async fn handle_search_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.search_form;
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Enter => self.submit_search().await?,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_search().await?;
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::COMMAND_MODIFIER) => {
                form.clear();
            }
            KeyCode::Esc => self.state.list_focus.toggle(),
            KeyCode::Left => form.get_active_field_mut().prev_option(),
            KeyCode::Right => form.get_active_field_mut().next_option(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.get_active_field_mut().push_char(c);
            }
            KeyCode::Backspace => form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the result list has focus
    async fn handle_results_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => self.open_create_form(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_form().await?,
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::PageDown => self.change_page(1).await?,
            KeyCode::PageUp => self.change_page(-1).await?,
            KeyCode::Char('/') | KeyCode::Tab | KeyCode::Esc => self.state.list_focus.toggle(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Validate the search form and run the search if it passes
    async fn submit_search(&mut self) -> Result<()> {
        let errors = validate_search_form(&self.state.search_form.to_input());
        if !errors.is_empty() {
            self.state.dialogs.show_validation_errors(&errors);
            return Ok(());
        }

        let search = SubmittedSearch {
            condition: self.state.search_form.to_condition(),
            paging: Paging::new(0, self.page_size),
        };
        self.state.reset_selection();
        self.run_search(search).await
    }

    /// Execute a search and replace the result list
    async fn run_search(&mut self, search: SubmittedSearch) -> Result<()> {
        tracing::debug!(
            page = search.paging.page,
            filtered = !search.condition.is_empty(),
            "Running notice search"
        );
        match self.service.search(&search.condition, search.paging).await {
            Ok(page) => {
                let found = page.total;
                self.state.submitted_search = Some(SubmittedSearch {
                    condition: search.condition,
                    paging: page.paging,
                });
                self.state.set_results(page);
                if found > 0 {
                    self.state.list_focus = ListFocus::Results;
                }
                self.state.status_message = Some(format!("{found} notice(s) found"));
            }
            Err(e) => self.show_service_error("Search failed", e),
        }
        Ok(())
    }

    /// Re-run the last submitted search, or the unfiltered one if none ran yet
    async fn rerun_search(&mut self, _rerun: RerunSearch) -> Result<()> {
        let search = self
            .state
            .submitted_search
            .clone()
            .unwrap_or_else(|| SubmittedSearch {
                paging: Paging::new(0, self.page_size),
                ..Default::default()
            });
        // row indices refer to the old ordering
        self.state.reset_selection();
        self.run_search(search).await
    }

    /// Move to the previous or next result page
    async fn change_page(&mut self, delta: isize) -> Result<()> {
        let Some(mut search) = self.state.submitted_search.clone() else {
            return Ok(());
        };
        let target = search.paging.page as isize + delta;
        if target < 0 || target as usize >= self.state.results.total_pages() {
            return Ok(());
        }
        search.paging.page = target as usize;
        self.state.reset_selection();
        self.run_search(search).await
    }

    fn open_create_form(&mut self) {
        self.state.notice_form = Some(NoticeForm::new());
        self.state.current_view = View::NoticeForm;
    }

    async fn open_edit_form(&mut self) -> Result<()> {
        let selected = self.state.selected_notice().and_then(|n| n.id);
        if !self.state.dialogs.require_row_selected(selected.is_some()) {
            return Ok(());
        }
        let Some(id) = selected else {
            return Ok(());
        };

        match self.service.find_by_id(id).await {
            Ok(notice) => {
                self.state.notice_form = Some(NoticeForm::from_notice(&notice));
                self.state.current_view = View::NoticeForm;
            }
            Err(e) => self.show_service_error("Failed to load notice", e),
        }
        Ok(())
    }

    /// Arm a delete of the selected row and ask for confirmation
    fn request_delete(&mut self) {
        let selected = self
            .state
            .selected_notice()
            .and_then(|n| n.id.map(|id| (id, n.title.clone())));
        if !self.state.dialogs.require_row_selected(selected.is_some()) {
            return;
        }
        if let Some((id, display)) = selected {
            self.state.dialogs.arm(PendingAction::Delete { id, display });
            self.state.dialogs.open_confirm();
        }
    }

    /// Submit the action armed before the confirm dialog
    async fn submit_armed_action(&mut self) -> Result<()> {
        let Some(action) = self.state.dialogs.confirm_delete() else {
            return Ok(());
        };
        match action {
            PendingAction::Delete { id, .. } => match self.service.delete(id).await {
                Ok(()) => {
                    self.state.reset_selection();
                    self.state.dialogs.show_success(MSG_PROCESS_COMPLETED);
                }
                Err(e) => self.show_service_error("Failed to delete notice", e),
            },
        }
        Ok(())
    }

    /// Handle keys in the notice create/edit form
    async fn handle_notice_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.state.notice_form.as_mut() else {
            self.state.current_view = View::List;
            return Ok(());
        };

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_notice_form().await?;
            }
            KeyCode::Esc => {
                self.state.clear_form();
                self.state.current_view = View::List;
            }
            KeyCode::Left => form.get_active_field_mut().prev_option(),
            KeyCode::Right => form.get_active_field_mut().next_option(),
            KeyCode::Enter => {
                let field = form.get_active_field_mut();
                if field.is_multiline() {
                    field.push_char('\n');
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.get_active_field_mut().push_char(c);
            }
            KeyCode::Backspace => form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the notice form and create or update the notice
    async fn submit_notice_form(&mut self) -> Result<()> {
        let Some(form) = self.state.notice_form.as_ref() else {
            return Ok(());
        };

        let errors = validate_notice_form(&form.to_input());
        if !errors.is_empty() {
            self.state.dialogs.show_validation_errors(&errors);
            return Ok(());
        }

        let Some(notice) = form.to_notice() else {
            tracing::warn!("Validated notice form did not convert to a notice");
            return Ok(());
        };

        let result = match form.mode {
            FormMode::Create => self.service.create(notice).await,
            FormMode::Edit(_) => self.service.update(notice).await,
        };

        match result {
            Ok(_) => {
                self.state.clear_form();
                self.state.reset_selection();
                self.state.current_view = View::List;
                self.state.dialogs.show_success(MSG_PROCESS_COMPLETED);
            }
            Err(e) => self.show_service_error("Failed to save notice", e),
        }
        Ok(())
    }

    fn show_service_error(&mut self, context: &str, err: anyhow::Error) {
        tracing::warn!("{context}: {err:#}");
        self.state
            .dialogs
            .show_error(vec![format!("{context}: {err}")], SERVICE_ERROR_HEADING);
    }
}
