//! Error dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::state::DialogController;
use ratatui::{style::Color, Frame};

/// Render the error dialog: its heading and one bullet per message
pub fn render_error_dialog(frame: &mut Frame, dialogs: &DialogController) {
    render_dialog(
        frame,
        DialogConfig {
            title: dialogs.error_heading(),
            title_color: Color::Red,
            border_color: Color::Red,
            lines: dialogs.error_messages().to_vec(),
            bullet: "• ",
            hint: Some(key_hint(&["Enter", "Esc"], "dismiss")),
            max_width: 70,
        },
    );
}
