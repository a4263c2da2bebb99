pub mod help_overlay;
pub mod input_row;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::ops::BoardView;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | input | bulk actions | list | counters | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // bordered input + button
            Constraint::Length(1), // bulk actions
            Constraint::Min(1),    // task list
            Constraint::Length(1), // filter + counters
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    render_actions(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[3]);
    render_counters(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![
        Span::styled(" \u{2714} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            "Todo List",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.in_flight > 0 {
        let label = format!("syncing ({})", app.in_flight);
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let width = area.width as usize;
        if used + label.len() + 1 < width {
            spans.push(Span::styled(
                " ".repeat(width - used - label.len() - 1),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(label, Style::default().fg(app.theme.yellow).bg(bg)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default().fg(app.theme.highlight).bg(bg);
    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let line = Line::from(vec![
        Span::styled(" A ", key_style),
        Span::styled("Complete All Tasks", label_style),
        Span::styled("   D ", key_style),
        Span::styled("Delete All Tasks", label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_counters(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let view = BoardView::of(&app.board);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default().fg(app.theme.text_bright).bg(bg);
    let line = Line::from(vec![
        Span::styled(" Filter: ", dim),
        Span::styled(view.filter.label(), value),
        Span::styled("  \u{2502}  Completed: ", dim),
        Span::styled(view.completed_count.to_string(), value),
        Span::styled("  \u{2502}  Total Tasks: ", dim),
        Span::styled(view.total_count.to_string(), value),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
