//! Yes/no dialog for deletions and the two-step reset

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::ConfirmAction;
use crate::tui::layout::centered_rect_fixed;

fn title(action: &ConfirmAction) -> &'static str {
    match action {
        ConfirmAction::DeleteTransaction(_) => " Delete Transaction ",
        ConfirmAction::DeleteCategory(_) => " Delete Category ",
        ConfirmAction::ResetAll => " Clear All Data (1/2) ",
        ConfirmAction::ResetAllFinal => " Clear All Data (2/2) ",
    }
}

pub fn render(frame: &mut Frame, action: &ConfirmAction) {
    // The final reset step is drawn in red
    let accent = match action {
        ConfirmAction::ResetAllFinal => Color::Red,
        _ => Color::Yellow,
    };

    let area = centered_rect_fixed(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title(action))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let keys = Line::from(vec![
        Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" confirm   "),
        Span::styled("n / Esc", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" keep everything"),
    ]);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(action.message()),
        Line::default(),
        keys.alignment(Alignment::Center),
    ])
    .block(block)
    .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}
