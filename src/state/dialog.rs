//! Modal dialog state: error, confirm and success overlays

use crate::validation::{messages, ValidationError, INPUT_ERROR_HEADING, SELECTION_ERROR_HEADING};

/// Action held back until the user confirms it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Delete { id: u64, display: String },
}

impl PendingAction {
    /// Short description for the confirm dialog
    pub fn describe(&self) -> String {
        match self {
            Self::Delete { id, display } => format!("#{id} {display}"),
        }
    }
}

/// Hand-off returned when the success dialog is acknowledged; the owner
/// re-executes the last submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RerunSearch;

/// Visibility and content of the three dialogs.
///
/// The dialogs are independent: opening one never closes another.
#[derive(Debug, Clone, Default)]
pub struct DialogController {
    error_visible: bool,
    error_heading: String,
    error_messages: Vec<String>,
    confirm_visible: bool,
    armed_action: Option<PendingAction>,
    success_visible: bool,
    success_message: String,
}

impl DialogController {
    /// Replace the error list, set the heading and show the error dialog
    pub fn show_error(&mut self, messages: Vec<String>, heading: &str) {
        self.error_heading = heading.to_string();
        self.error_messages = messages;
        self.error_visible = true;
    }

    /// Show validation errors under the default "Input Error" heading
    pub fn show_validation_errors(&mut self, errors: &[ValidationError]) {
        self.show_error(messages(errors), INPUT_ERROR_HEADING);
    }

    pub fn close_error(&mut self) {
        self.error_visible = false;
        self.error_messages.clear();
    }

    pub fn open_confirm(&mut self) {
        self.confirm_visible = true;
    }

    /// Hide the confirm dialog and drop the armed action
    pub fn close_confirm(&mut self) {
        self.confirm_visible = false;
        self.armed_action = None;
    }

    /// Pre-arm the action submitted by [`confirm_delete`](Self::confirm_delete)
    pub fn arm(&mut self, action: PendingAction) {
        self.armed_action = Some(action);
    }

    /// Hide the confirm dialog and hand back the armed action for submission
    pub fn confirm_delete(&mut self) -> Option<PendingAction> {
        self.confirm_visible = false;
        self.armed_action.take()
    }

    pub fn show_success(&mut self, message: &str) {
        self.success_message = message.to_string();
        self.success_visible = true;
    }

    pub fn close_success(&mut self) {
        self.success_visible = false;
    }

    pub fn close_success_and_rerun(&mut self) -> RerunSearch {
        self.success_visible = false;
        RerunSearch
    }

    /// Guard for row actions. Shows a selection error and returns false when
    /// nothing is selected.
    pub fn require_row_selected(&mut self, has_selection: bool) -> bool {
        if !has_selection {
            self.show_error(
                vec![ValidationError::NoRowSelected.to_string()],
                SELECTION_ERROR_HEADING,
            );
        }
        has_selection
    }

    pub fn is_error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn error_heading(&self) -> &str {
        &self.error_heading
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn is_confirm_visible(&self) -> bool {
        self.confirm_visible
    }

    pub fn armed_action(&self) -> Option<&PendingAction> {
        self.armed_action.as_ref()
    }

    pub fn is_success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    pub fn any_visible(&self) -> bool {
        self.error_visible || self.confirm_visible || self.success_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_all_hidden() {
        let dialogs = DialogController::default();
        assert!(!dialogs.any_visible());
        assert!(dialogs.armed_action().is_none());
    }

    #[test]
    fn test_show_error_replaces_list() {
        let mut dialogs = DialogController::default();
        dialogs.show_error(vec!["A".into(), "B".into()], INPUT_ERROR_HEADING);
        dialogs.show_error(vec!["C".into()], "Other");
        assert!(dialogs.is_error_visible());
        assert_eq!(dialogs.error_heading(), "Other");
        assert_eq!(dialogs.error_messages(), ["C".to_string()]);
    }

    #[test]
    fn test_close_error_hides_and_empties() {
        let mut dialogs = DialogController::default();
        dialogs.show_error(vec!["A".into(), "B".into()], INPUT_ERROR_HEADING);
        dialogs.close_error();
        assert!(!dialogs.is_error_visible());
        assert!(dialogs.error_messages().is_empty());

        // closing again is a no-op
        dialogs.close_error();
        assert!(!dialogs.is_error_visible());
    }

    #[test]
    fn test_validation_errors_use_input_heading() {
        let mut dialogs = DialogController::default();
        dialogs.show_validation_errors(&[
            ValidationError::missing("Title"),
            ValidationError::InvalidDateRange,
        ]);
        assert_eq!(dialogs.error_heading(), "Input Error");
        assert_eq!(dialogs.error_messages().len(), 2);
        assert_eq!(dialogs.error_messages()[0], "Please enter Title.");
    }

    #[test]
    fn test_require_row_selected_without_selection() {
        let mut dialogs = DialogController::default();
        assert!(!dialogs.require_row_selected(false));
        assert!(dialogs.is_error_visible());
        assert_eq!(dialogs.error_heading(), "Selection Error");
        assert_eq!(dialogs.error_messages(), ["Please select a row.".to_string()]);
    }

    #[test]
    fn test_require_row_selected_with_selection() {
        let mut dialogs = DialogController::default();
        assert!(dialogs.require_row_selected(true));
        assert!(!dialogs.is_error_visible());
    }

    #[test]
    fn test_confirm_delete_hands_back_armed_action() {
        let mut dialogs = DialogController::default();
        let action = PendingAction::Delete {
            id: 3,
            display: "Maintenance".to_string(),
        };
        dialogs.arm(action.clone());
        dialogs.open_confirm();
        assert!(dialogs.is_confirm_visible());

        assert_eq!(dialogs.confirm_delete(), Some(action));
        assert!(!dialogs.is_confirm_visible());
        assert_eq!(dialogs.confirm_delete(), None);
    }

    #[test]
    fn test_close_confirm_disarms() {
        let mut dialogs = DialogController::default();
        dialogs.arm(PendingAction::Delete {
            id: 1,
            display: String::new(),
        });
        dialogs.open_confirm();
        dialogs.close_confirm();
        assert!(!dialogs.is_confirm_visible());
        assert!(dialogs.armed_action().is_none());
    }

    #[test]
    fn test_success_then_rerun() {
        let mut dialogs = DialogController::default();
        dialogs.show_success("Process completed.");
        assert!(dialogs.is_success_visible());
        assert_eq!(dialogs.success_message(), "Process completed.");

        assert_eq!(dialogs.close_success_and_rerun(), RerunSearch);
        assert!(!dialogs.is_success_visible());
    }

    #[test]
    fn test_dialogs_are_not_mutually_exclusive() {
        let mut dialogs = DialogController::default();
        dialogs.show_success("done");
        dialogs.open_confirm();
        dialogs.show_error(vec!["x".into()], INPUT_ERROR_HEADING);
        assert!(dialogs.is_success_visible());
        assert!(dialogs.is_confirm_visible());
        assert!(dialogs.is_error_visible());

        dialogs.close_success();
        assert!(dialogs.is_error_visible());
    }

    #[test]
    fn test_describe_pending_delete() {
        let action = PendingAction::Delete {
            id: 12,
            display: "Office closure".to_string(),
        };
        assert_eq!(action.describe(), "#12 Office closure");
    }
}
