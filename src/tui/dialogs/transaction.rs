//! Transaction entry/edit dialog
//!
//! Modal form with tab navigation. Type and category are picked by
//! cycling with Left/Right; the category choices follow the selected type.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::clock::Clock;
use crate::models::{Money, Transaction, TransactionInput, TransactionType};
use crate::storage::Store;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

const LABEL_WIDTH: usize = 11;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Description,
    Amount,
    Type,
    Category,
    Date,
}

impl TransactionField {
    /// Next field (Tab)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Type,
            Self::Type => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Description,
        }
    }

    /// Previous field (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Amount => Self::Description,
            Self::Type => Self::Amount,
            Self::Category => Self::Type,
            Self::Date => Self::Category,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub date_input: TextInput,
    pub is_edit: bool,
    pub error_message: Option<String>,
}

impl TransactionFormState {
    /// Empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self {
            focused_field: TransactionField::Description,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            kind: None,
            category: None,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            is_edit: false,
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Form pre-populated from an existing transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        let mut state = Self::new(txn.date);
        state.is_edit = true;
        state.description_input.set_content(txn.description.clone());
        state
            .amount_input
            .set_content(format!("{:.2}", txn.amount.to_decimal()));
        state.kind = Some(txn.kind);
        state.category = Some(txn.category.clone());
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.description_input.focused = self.focused_field == TransactionField::Description;
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
        self.date_input.focused = self.focused_field == TransactionField::Date;
    }

    /// The text input under focus, if the focused field is free text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Type | TransactionField::Category => None,
        }
    }

    /// Cycle unset -> Income -> Expense (or backwards)
    ///
    /// A chosen category that does not suit the new type is cleared.
    pub fn cycle_type(&mut self, forward: bool, choices_for: impl Fn(Option<TransactionType>) -> Vec<String>) {
        self.kind = match (self.kind, forward) {
            (None, true) => Some(TransactionType::Income),
            (Some(TransactionType::Income), true) => Some(TransactionType::Expense),
            (Some(TransactionType::Expense), true) => None,
            (None, false) => Some(TransactionType::Expense),
            (Some(TransactionType::Expense), false) => Some(TransactionType::Income),
            (Some(TransactionType::Income), false) => None,
        };

        if let Some(category) = &self.category {
            if !choices_for(self.kind).contains(category) {
                self.category = None;
            }
        }
    }

    /// Move to the next or previous entry of `choices`
    pub fn cycle_category(&mut self, choices: &[String], forward: bool) {
        if choices.is_empty() {
            self.category = None;
            return;
        }

        let current = self
            .category
            .as_ref()
            .and_then(|c| choices.iter().position(|choice| choice == c));
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => choices.len() - 1,
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(i), false) => (i + choices.len() - 1) % choices.len(),
        };
        self.category = Some(choices[index].clone());
    }

    /// Collect the form into ledger input
    ///
    /// A blank or unreadable amount counts as missing. A date that is present
    /// but malformed is reported here.
    pub fn build_input(&self) -> Result<TransactionInput, String> {
        let date_text = self.date_input.value().trim();
        let date = if date_text.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                    .map_err(|_| "Invalid date format. Use YYYY-MM-DD".to_string())?,
            )
        };

        Ok(TransactionInput {
            description: self.description_input.value().to_string(),
            amount: Money::parse(self.amount_input.value()).ok(),
            kind: self.kind,
            category: self.category.clone().unwrap_or_default(),
            date,
        })
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Handle a key press while the transaction dialog is open
pub fn handle_key<S: Store, C: Clock>(app: &mut App<'_, S, C>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.transaction_form.prev_field()
        }
        KeyCode::Tab | KeyCode::Down => app.transaction_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.transaction_form.prev_field(),
        KeyCode::Enter => save_transaction(app),
        code => match app.transaction_form.focused_field {
            TransactionField::Type => {
                if let Some(forward) = cycle_direction(code) {
                    let ledger = &*app.ledger;
                    app.transaction_form
                        .cycle_type(forward, |kind| ledger.categories_for_type(kind));
                }
            }
            TransactionField::Category => {
                if let Some(forward) = cycle_direction(code) {
                    let choices = app.ledger.categories_for_type(app.transaction_form.kind);
                    app.transaction_form.cycle_category(&choices, forward);
                }
            }
            _ => {
                if let Some(input) = app.transaction_form.focused_input() {
                    edit_text(input, code);
                }
            }
        },
    }
}

fn cycle_direction(code: KeyCode) -> Option<bool> {
    match code {
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => Some(true),
        KeyCode::Left | KeyCode::Char('h') => Some(false),
        _ => None,
    }
}

/// Apply an editing key to a text input
pub(crate) fn edit_text(input: &mut TextInput, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn save_transaction<S: Store, C: Clock>(app: &mut App<'_, S, C>) {
    let input = match app.transaction_form.build_input() {
        Ok(input) => input,
        Err(e) => {
            app.transaction_form.set_error(e);
            return;
        }
    };

    let editing = match &app.active_dialog {
        ActiveDialog::EditTransaction(id) => Some(id.clone()),
        _ => None,
    };

    let result = match editing {
        Some(id) => app
            .ledger
            .update_transaction(&id, &input)
            .map(|_| "Transaction updated successfully!"),
        _ => app
            .ledger
            .add_transaction(&input)
            .map(|_| "Transaction added successfully!"),
    };

    match result {
        Ok(message) => {
            app.close_dialog();
            app.set_status(message);
        }
        Err(e) => app.transaction_form.set_error(e.to_string()),
    }
}

/// Render the transaction dialog
pub fn render<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>) {
    let area = centered_rect_fixed(64, 13, frame.area());
    frame.render_widget(Clear, area);

    let form = &app.transaction_form;
    let title = if form.is_edit {
        " Edit Transaction "
    } else {
        " Add Transaction "
    };

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
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Type
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(form.description_input.to_line(LABEL_WIDTH)), chunks[0]);
    frame.render_widget(Paragraph::new(form.amount_input.to_line(LABEL_WIDTH)), chunks[1]);

    let kind_label = form.kind.map(|k| k.to_string());
    frame.render_widget(
        Paragraph::new(choice_line(
            "Type",
            kind_label.as_deref(),
            "< choose income or expense >",
            form.focused_field == TransactionField::Type,
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(choice_line(
            "Category",
            form.category.as_deref(),
            "< choose a category >",
            form.focused_field == TransactionField::Category,
        )),
        chunks[3],
    );
    frame.render_widget(Paragraph::new(form.date_input.to_line(LABEL_WIDTH)), chunks[4]);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ))),
            chunks[6],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn choice_line<'a>(label: &'a str, value: Option<&'a str>, placeholder: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_span = match (value, focused) {
        (Some(value), true) => Span::styled(
            format!("< {} >", value),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        (Some(value), false) => Span::styled(value, Style::default().fg(Color::Yellow)),
        (None, _) => Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
    };

    Line::from(vec![
        Span::styled(format!("{:>width$}: ", label, width = LABEL_WIDTH), label_style),
        value_span,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_blank_form_reports_missing_fields() {
        let form = TransactionFormState::new(today());
        let input = form.build_input().unwrap();
        assert_eq!(input.amount, None);
        assert_eq!(input.kind, None);
        assert_eq!(input.date, Some(today()));
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let mut form = TransactionFormState::new(today());
        form.date_input.set_content("15/03/2024");
        assert!(form.build_input().is_err());
    }

    #[test]
    fn test_type_change_clears_ineligible_category() {
        let categories = CategorySet::default();
        let mut form = TransactionFormState::new(today());

        form.cycle_type(true, |kind| categories.for_type(kind));
        assert_eq!(form.kind, Some(TransactionType::Income));
        form.cycle_category(&categories.for_type(form.kind), true);
        assert_eq!(form.category.as_deref(), Some("Salary"));

        form.cycle_type(true, |kind| categories.for_type(kind));
        assert_eq!(form.kind, Some(TransactionType::Expense));
        assert_eq!(form.category, None);
    }

    #[test]
    fn test_gifts_survive_type_change() {
        let categories = CategorySet::default();
        let mut form = TransactionFormState::new(today());
        form.kind = Some(TransactionType::Income);
        form.category = Some("Gifts".into());

        form.cycle_type(true, |kind| categories.for_type(kind));
        assert_eq!(form.category.as_deref(), Some("Gifts"));
    }

    #[test]
    fn test_cycle_category_wraps() {
        let choices = vec!["A".to_string(), "B".to_string()];
        let mut form = TransactionFormState::new(today());
        form.cycle_category(&choices, false);
        assert_eq!(form.category.as_deref(), Some("B"));
        form.cycle_category(&choices, true);
        assert_eq!(form.category.as_deref(), Some("A"));
    }

    #[test]
    fn test_from_transaction() {
        let input = TransactionInput::new(
            "Coffee",
            Money::from_cents(450),
            TransactionType::Expense,
            "Food & Dining",
            today(),
        );
        let txn = Transaction::new(input.validate().unwrap(), chrono::Utc::now());
        let form = TransactionFormState::from_transaction(&txn);

        assert!(form.is_edit);
        assert_eq!(form.amount_input.value(), "4.50");
        assert_eq!(form.build_input().unwrap(), input);
    }
}
