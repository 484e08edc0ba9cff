//! Summary cards and the monthly budget gauge

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::clock::Clock;
use crate::models::Money;
use crate::reports::BudgetBand;
use crate::storage::Store;
use crate::tui::app::App;
use crate::tui::layout::summary_cards;

pub fn render_summary<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let summary = app.ledger.compute_summary();
    let symbol = &app.settings.currency_symbol;
    let [income, expenses, balance] = summary_cards(area);

    render_card(frame, income, "Income", summary.total_income, symbol, Color::Green);
    render_card(frame, expenses, "Expenses", summary.total_expenses, symbol, Color::Red);
    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Cyan
    };
    render_card(frame, balance, "Balance", summary.balance, symbol, balance_color);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, amount: Money, symbol: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let text = Paragraph::new(Span::styled(
        amount.format_with_symbol(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(text, area);
}

pub fn render_budget<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let status = app.ledger.current_budget_status();
    let symbol = &app.settings.currency_symbol;

    let block = Block::default()
        .title(" Monthly Budget ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if !status.budget.is_positive() {
        let hint = Paragraph::new(Span::styled(
            "No budget set. Press 'b' to set one.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let color = match status.band {
        BudgetBand::Normal => Color::Green,
        BudgetBand::Warning => Color::Yellow,
        BudgetBand::Critical => Color::Red,
    };

    let label = format!(
        "{} of {} spent ({}%), {} remaining",
        status.spent.format_with_symbol(symbol),
        status.budget.format_with_symbol(symbol),
        status.rounded_percentage(),
        status.remaining.format_with_symbol(symbol),
    );

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(status.display_percentage() / 100.0)
        .label(Span::styled(label, Style::default().fg(Color::White)));
    frame.render_widget(gauge, area);
}
