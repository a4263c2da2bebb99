use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k \u{2191}/\u{2193}", "move"),
    ("g / G", "first / last"),
    ("space x", "toggle completed"),
    ("e", "edit title"),
    ("d", "delete task"),
    ("a i Enter", "focus input"),
    ("Esc", "leave input / cancel edit"),
    ("A", "complete all tasks"),
    ("D", "delete completed tasks"),
    ("f", "cycle filter"),
    ("1 2 3", "all / uncompleted / completed"),
    ("?", "close help"),
    ("q", "quit"),
];

/// Centered overlay listing the key map
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let width = 48.min(area.width);
    let height = (BINDINGS.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", keys), key_style),
                Span::styled(*what, text_style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(" Key bindings ", key_style));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block).style(Style::default().bg(bg)), popup);
}
