//! Single-field dialogs: new category and monthly budget

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::transaction::edit_text;
use crate::clock::Clock;
use crate::models::Money;
use crate::storage::Store;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;

/// Handle a key press in the category or budget dialog
pub fn handle_key<S: Store, C: Clock>(app: &mut App<'_, S, C>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => submit(app),
        code => edit_text(&mut app.prompt_input, code),
    }
}

fn submit<S: Store, C: Clock>(app: &mut App<'_, S, C>) {
    let value = app.prompt_input.value().to_string();
    let result = match app.active_dialog {
        ActiveDialog::AddCategory => app
            .ledger
            .add_category(&value)
            .map(|_| "Category added successfully!"),
        ActiveDialog::SetBudget => app
            .ledger
            .set_budget(Money::parse(&value).ok())
            .map(|_| "Monthly budget updated successfully!"),
        _ => return,
    };

    match result {
        Ok(message) => {
            app.close_dialog();
            app.set_status(message);
        }
        Err(e) => app.prompt_error = Some(e.to_string()),
    }
}

/// Render the category or budget dialog
pub fn render<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>) {
    let title = match app.active_dialog {
        ActiveDialog::SetBudget => " Set Monthly Budget ",
        _ => " Add Category ",
    };

    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(app.prompt_input.to_line(6)), chunks[0]);

    if let Some(error) = &app.prompt_error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[2],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}
