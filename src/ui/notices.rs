//! Notice list view: search form and results

use super::forms::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{Form, ListFocus};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

/// Draw the list view
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    draw_search_form(frame, chunks[0], app);
    draw_results(frame, chunks[1], app);
}

fn border_color(focused: bool) -> Color {
    if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw the search form (top)
fn draw_search_form(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.list_focus == ListFocus::SearchForm;
    let title = if app.state.search_form.has_criteria() {
        " Search (filters set) "
    } else {
        " Search "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let field_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(32),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
        ])
        .split(rows[0]);

    let form = &app.state.search_form;
    for (index, field_area) in field_areas.iter().enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                *field_area,
                field,
                focused && form.active_field() == index,
                app.state.show_inline_feedback,
            );
        }
    }

    draw_help_text(
        frame,
        rows[1],
        &[
            ("Enter", "search"),
            (SAVE_SHORTCUT, "search"),
            (CLEAR_SHORTCUT, "clear"),
            ("Tab", "next field"),
            ("Esc", "results"),
        ],
    );
}

/// Draw the result table (bottom)
fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.list_focus == ListFocus::Results;
    let page = &app.state.results;

    let title = if app.state.has_results() {
        let prev = if page.has_previous() { "◂ " } else { "" };
        let next = if page.has_next() { " ▸" } else { "" };
        format!(
            " Notices - {prev}page {}/{}{next} ({} total) ",
            page.paging.page + 1,
            page.total_pages().max(1),
            page.total
        )
    } else {
        " Notices ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));

    if page.items.is_empty() {
        let message = if app.state.has_results() {
            "No notices match the search.\nPress 'n' to create a new notice."
        } else {
            "Enter search filters and press Enter.\nPress Esc then 'n' to create a new notice."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let today = Local::now().date_naive();
    let rows: Vec<Row> = page
        .items
        .iter()
        .enumerate()
        .map(|(idx, notice)| {
            let is_selected = app.state.selected_index == Some(idx);
            let prefix = if is_selected { "▸" } else { " " };
            let active = if notice.is_active_on(today) { "●" } else { "" };

            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                prefix.to_string(),
                notice.id.map(|id| id.to_string()).unwrap_or_default(),
                notice.title.clone(),
                notice.category_label().to_string(),
                notice.post_date.to_string(),
                format!("{} ~ {}", notice.start_date, notice.end_date),
                active.to_string(),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["", "No.", "Title", "Category", "Posted", "Period", "Active"])
        .style(Style::default().fg(Color::DarkGray));

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(23),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);

    frame.render_widget(table, area);
}
