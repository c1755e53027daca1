//! Success dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::state::DialogController;
use ratatui::{style::Color, Frame};

/// Render the success dialog shown after a completed action
pub fn render_success_dialog(frame: &mut Frame, dialogs: &DialogController) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Completed",
            title_color: Color::Green,
            border_color: Color::Green,
            lines: vec![dialogs.success_message().to_string()],
            hint: Some(key_hint(&["Enter"], "refresh the list")),
            ..Default::default()
        },
    );
}
