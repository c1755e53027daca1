//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod notices;

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::List => notices::draw_list(frame, main_area, app),
        View::NoticeForm => forms::draw_notice_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Dialogs are independent; the error dialog is drawn last so it stays on top
    let dialogs = &app.state.dialogs;
    if dialogs.is_success_visible() {
        render_success_dialog(frame, dialogs);
    }
    if dialogs.is_confirm_visible() {
        render_confirm_dialog(frame, dialogs);
    }
    if dialogs.is_error_visible() {
        render_error_dialog(frame, dialogs);
    }
}
