//! Category panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::clock::Clock;
use crate::models::{is_eligible, TransactionType};
use crate::storage::Store;
use crate::tui::app::{App, FocusedPanel};

pub fn render<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Categories;

    let items: Vec<ListItem> = app
        .ledger
        .categories()
        .iter()
        .map(|name| {
            let style = if is_eligible(name, TransactionType::Expense) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(name.as_str()).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Categories ({}) ", app.ledger.categories().len()))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_category_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
