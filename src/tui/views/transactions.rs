//! Transactions table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::clock::Clock;
use crate::display::format_signed_amount;
use crate::storage::Store;
use crate::tui::app::{App, FocusedPanel};

pub fn render<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Transactions;
    let transactions = app.visible_transactions();

    let block = Block::default()
        .title(format!(
            " Transactions [{}] ({}) ",
            app.type_filter.label(),
            transactions.len()
        ))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if transactions.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No transactions yet. Press 'a' to add one.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let amount_color = if txn.is_income() {
                Color::Green
            } else {
                Color::Red
            };
            Row::new(vec![
                Cell::from(txn.date.format(&app.settings.date_format).to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(txn.category.clone()),
                Cell::from(Span::styled(
                    format!("{:>12}", format_signed_amount(txn, symbol)),
                    Style::default().fg(amount_color),
                )),
            ])
        })
        .collect();

    let header = Row::new(vec!["Date", "Description", "Category", "      Amount"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(13),
            Constraint::Min(16),
            Constraint::Length(18),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    if focused {
        state.select(Some(app.selected_transaction_index));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
