//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{ListFocus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the current view
fn view_hints(app: &App) -> &'static str {
    if app.state.dialogs.any_visible() {
        return "dialog open";
    }
    match (app.state.current_view, app.state.list_focus) {
        (View::List, ListFocus::Results) => {
            "↑↓ select  n new  e edit  d delete  PgUp/PgDn page  / search  q quit"
        }
        (View::List, ListFocus::SearchForm) => "type to filter  Enter search  Esc results",
        (View::NoticeForm, _) => "Tab next field  Ctrl+S save  Esc cancel",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Notices ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if let Some(ref message) = app.state.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
