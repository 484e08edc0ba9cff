//! Key binding reference

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("j / k", "Move selection"),
    ("Tab", "Switch between transactions and categories"),
    ("a", "Add transaction"),
    ("e / Enter", "Edit selected transaction"),
    ("d", "Delete selected transaction or category"),
    ("f", "Cycle filter: all / income / expenses"),
    ("c", "Add category"),
    ("b", "Set monthly budget"),
    ("R", "Clear all data"),
    ("?", "This help"),
    ("q", "Quit"),
];

pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(58, BINDINGS.len() as u16 + 4, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:>12}  ", keys), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
