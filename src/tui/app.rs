//! Application state for the TUI
//!
//! The App struct holds the ledger and all state needed for rendering and
//! handling events.

use crate::clock::Clock;
use crate::config::Settings;
use crate::ledger::{LedgerModel, TransactionFilter};
use crate::models::{Transaction, TransactionId, TransactionType};
use crate::storage::Store;

use super::dialogs::transaction::TransactionFormState;
use super::widgets::TextInput;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Transactions,
    Categories,
}

/// Type filter for the transactions table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    /// All -> Income -> Expense -> All
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expense,
            Self::Expense => Self::All,
        }
    }

    pub fn kind(self) -> Option<TransactionType> {
        match self {
            Self::All => None,
            Self::Income => Some(TransactionType::Income),
            Self::Expense => Some(TransactionType::Expense),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Income => "Income",
            Self::Expense => "Expenses",
        }
    }
}

/// An action waiting for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTransaction(TransactionId),
    DeleteCategory(String),
    /// First of the two reset confirmations
    ResetAll,
    /// Second reset confirmation; accepting it wipes the ledger
    ResetAllFinal,
}

impl ConfirmAction {
    pub fn message(&self) -> String {
        match self {
            Self::DeleteTransaction(_) => "Are you sure you want to delete this transaction?".into(),
            Self::DeleteCategory(name) => {
                format!("Are you sure you want to delete the category \"{}\"?", name)
            }
            Self::ResetAll => {
                "Are you sure you want to clear all data? This action cannot be undone.".into()
            }
            Self::ResetAllFinal => "This will delete all transactions, categories, and budget \
                                    settings. Are you absolutely sure?"
                .into(),
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    EditTransaction(TransactionId),
    AddCategory,
    SetBudget,
    Confirm(ConfirmAction),
    Help,
}

/// Main application state
pub struct App<'a, S: Store, C: Clock> {
    pub ledger: &'a mut LedgerModel<S, C>,

    pub settings: &'a Settings,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub type_filter: TypeFilter,

    /// Selected row in the (filtered) transactions table
    pub selected_transaction_index: usize,

    pub selected_category_index: usize,

    pub active_dialog: ActiveDialog,

    pub transaction_form: TransactionFormState,

    /// Single-field input shared by the category and budget dialogs
    pub prompt_input: TextInput,

    /// Error shown inside the single-field dialogs
    pub prompt_error: Option<String>,

    pub status_message: Option<String>,
}

impl<'a, S: Store, C: Clock> App<'a, S, C> {
    pub fn new(ledger: &'a mut LedgerModel<S, C>, settings: &'a Settings) -> Self {
        let today = ledger.clock().today();
        Self {
            ledger,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            type_filter: TypeFilter::default(),
            selected_transaction_index: 0,
            selected_category_index: 0,
            active_dialog: ActiveDialog::default(),
            transaction_form: TransactionFormState::new(today),
            prompt_input: TextInput::new(),
            prompt_error: None,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Transactions shown in the table, newest first
    pub fn visible_transactions(&self) -> Vec<Transaction> {
        let filter = TransactionFilter {
            kind: self.type_filter.kind(),
            ..TransactionFilter::default()
        };
        self.ledger.list_transactions(&filter)
    }

    pub fn selected_transaction(&self) -> Option<Transaction> {
        self.visible_transactions()
            .into_iter()
            .nth(self.selected_transaction_index)
    }

    pub fn selected_category(&self) -> Option<String> {
        self.ledger
            .categories()
            .names()
            .get(self.selected_category_index)
            .cloned()
    }

    pub fn cycle_type_filter(&mut self) {
        self.type_filter = self.type_filter.next();
        self.selected_transaction_index = 0;
    }

    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Transactions => FocusedPanel::Categories,
            FocusedPanel::Categories => FocusedPanel::Transactions,
        };
    }

    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Transactions => {
                self.selected_transaction_index = self.selected_transaction_index.saturating_sub(1)
            }
            FocusedPanel::Categories => {
                self.selected_category_index = self.selected_category_index.saturating_sub(1)
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Transactions => {
                let max = self.visible_transactions().len();
                if self.selected_transaction_index + 1 < max {
                    self.selected_transaction_index += 1;
                }
            }
            FocusedPanel::Categories => {
                let max = self.ledger.categories().len();
                if self.selected_category_index + 1 < max {
                    self.selected_category_index += 1;
                }
            }
        }
    }

    /// Keep selections inside their lists after a deletion or reset
    pub fn clamp_selection(&mut self) {
        let txn_count = self.visible_transactions().len();
        self.selected_transaction_index = self
            .selected_transaction_index
            .min(txn_count.saturating_sub(1));
        let cat_count = self.ledger.categories().len();
        self.selected_category_index = self
            .selected_category_index
            .min(cat_count.saturating_sub(1));
    }

    /// Open a dialog, preparing its form state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddTransaction => {
                self.transaction_form = TransactionFormState::new(self.ledger.clock().today());
            }
            ActiveDialog::EditTransaction(id) => match self.ledger.edit_transaction(id) {
                Ok(txn) => self.transaction_form = TransactionFormState::from_transaction(&txn),
                Err(e) => {
                    self.set_status(e.to_string());
                    return;
                }
            },
            ActiveDialog::AddCategory => {
                self.prompt_input = TextInput::new()
                    .label("Name")
                    .placeholder("New category name");
                self.prompt_input.focused = true;
                self.prompt_error = None;
            }
            ActiveDialog::SetBudget => {
                let current = self.ledger.monthly_budget();
                self.prompt_input = TextInput::new()
                    .label("Amount")
                    .placeholder("Monthly budget, e.g. 500");
                if current.is_positive() {
                    self.prompt_input
                        .set_content(format!("{:.2}", current.to_decimal()));
                }
                self.prompt_input.focused = true;
                self.prompt_error = None;
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog, ending any edit session
    pub fn close_dialog(&mut self) {
        if matches!(self.active_dialog, ActiveDialog::EditTransaction(_)) {
            self.ledger.close_edit();
        }
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Money, TransactionInput};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn ledger() -> LedgerModel<MemoryStore, FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut ledger = LedgerModel::load(MemoryStore::new(), FixedClock::on(today));
        for (desc, kind, category) in [
            ("Paycheck", TransactionType::Income, "Salary"),
            ("Rent", TransactionType::Expense, "Bills & Utilities"),
        ] {
            ledger
                .add_transaction(&TransactionInput::new(
                    desc,
                    Money::from_cents(1_000),
                    kind,
                    category,
                    today,
                ))
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_type_filter_cycles() {
        let mut ledger = ledger();
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        assert_eq!(app.visible_transactions().len(), 2);
        app.cycle_type_filter();
        assert_eq!(app.type_filter, TypeFilter::Income);
        assert!(app.visible_transactions().iter().all(|t| t.is_income()));
        app.cycle_type_filter();
        assert!(app.visible_transactions().iter().all(|t| t.is_expense()));
        app.cycle_type_filter();
        assert_eq!(app.type_filter, TypeFilter::All);
    }

    #[test]
    fn test_edit_dialog_tracks_session() {
        let mut ledger = ledger();
        let id = ledger.transactions()[0].id.clone();
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        app.open_dialog(ActiveDialog::EditTransaction(id.clone()));
        assert_eq!(app.ledger.current_edit_id(), Some(&id));
        assert_eq!(app.transaction_form.description_input.value(), "Paycheck");

        app.close_dialog();
        assert_eq!(app.ledger.current_edit_id(), None);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_selection_bounds() {
        let mut ledger = ledger();
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        app.move_up();
        assert_eq!(app.selected_transaction_index, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_transaction_index, 1);
    }
}
