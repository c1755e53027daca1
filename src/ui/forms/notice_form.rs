//! Notice form rendering (create/edit)

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::Form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the notice create/edit form
pub fn draw_notice_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.notice_form.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", form.mode.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Category
            Constraint::Length(3), // Dates
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let date_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[2]);

    let areas = [
        chunks[0],
        chunks[1],
        date_chunks[0],
        date_chunks[1],
        date_chunks[2],
        chunks[3],
    ];

    for (index, field_area) in areas.into_iter().enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                field_area,
                field,
                form.active_field() == index,
                app.state.show_inline_feedback,
            );
        }
    }

    draw_help_text(
        frame,
        chunks[4],
        &[
            ("Tab", "next field"),
            ("←/→", "category"),
            (SAVE_SHORTCUT, "save"),
            ("Esc", "cancel"),
        ],
    );
}
