//! Confirmation dialog component for destructive actions

use super::base::{render_dialog, DialogConfig};
use crate::state::DialogController;
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

/// Render the delete confirmation dialog for the armed action
pub fn render_confirm_dialog(frame: &mut Frame, dialogs: &DialogController) {
    let target = dialogs
        .armed_action()
        .map(|action| action.describe())
        .unwrap_or_else(|| "the selected notice".to_string());

    let hint = vec![
        Span::styled("y", Style::default().fg(Color::Cyan)),
        Span::styled("/", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" delete  ", Style::default().fg(Color::DarkGray)),
        Span::styled("n", Style::default().fg(Color::Cyan)),
        Span::styled("/", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            title_color: Color::Red,
            border_color: Color::Red,
            lines: vec![format!("Are you sure you want to delete {target}?")],
            hint: Some(hint),
            max_width: 50,
            ..Default::default()
        },
    );
}
