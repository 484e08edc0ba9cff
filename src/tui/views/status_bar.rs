//! Status bar view
//!
//! Shows the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::clock::Clock;
use crate::storage::Store;
use crate::tui::app::App;

const HINTS: &str = " a:Add  e:Edit  d:Delete  f:Filter  b:Budget  ?:Help  q:Quit ";

pub fn render<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.ledger.clock().today().format("%B %Y")),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(left_len + HINTS.len())
        .max(1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
