use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::ops::BoardView;
use crate::tui::app::App;

/// Render the filtered task list, or the loading / empty placeholder
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;

    if app.board.is_loading() {
        let line = Line::from(Span::styled(
            " Loading...",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // Keep the cursor row on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let view = BoardView::of(&app.board);
    if view.is_empty() {
        let msg = match view.filter {
            Filter::All => " No tasks yet. Press a to add one.",
            Filter::Completed => " No completed tasks.",
            Filter::Uncompleted => " Nothing left to do.",
        };
        let line = Line::from(Span::styled(msg, Style::default().fg(app.theme.dim).bg(bg)));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let editing = app.board.editing();
    let lines: Vec<Line> = view
        .visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(i, task)| {
            let selected = i == app.cursor;
            let row_bg = if selected { app.theme.selection_bg } else { bg };
            let marker = if selected { "\u{25B8}" } else { " " };
            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            let mut title_style = Style::default().bg(row_bg).fg(if task.completed {
                app.theme.done
            } else {
                app.theme.text
            });
            if task.completed {
                title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
            }
            if selected {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(
                    format!("{} ", marker),
                    Style::default().fg(app.theme.highlight).bg(row_bg),
                ),
                Span::styled(
                    format!("{} ", checkbox),
                    Style::default().fg(app.theme.highlight).bg(row_bg),
                ),
                Span::styled(task.title.clone(), title_style),
            ];
            if editing == Some(task.id) {
                spans.push(Span::styled(
                    "  (editing)",
                    Style::default().fg(app.theme.yellow).bg(row_bg),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
