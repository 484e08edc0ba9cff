//! TUI views: dashboard strip, transactions, categories and status bar

pub mod categories;
pub mod dashboard;
pub mod status_bar;
pub mod transactions;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::clock::Clock;
use crate::storage::Store;

/// Render the entire application
pub fn render<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>) {
    let layout = AppLayout::new(frame.area());

    dashboard::render_summary(frame, app, layout.summary);
    dashboard::render_budget(frame, app, layout.budget);
    transactions::render(frame, app, layout.transactions);
    categories::render(frame, app, layout.categories);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_dialog<S: Store, C: Clock>(frame: &mut Frame, app: &App<'_, S, C>) {
    match &app.active_dialog {
        ActiveDialog::AddTransaction | ActiveDialog::EditTransaction(_) => {
            dialogs::transaction::render(frame, app);
        }
        ActiveDialog::AddCategory | ActiveDialog::SetBudget => {
            dialogs::prompt::render(frame, app);
        }
        ActiveDialog::Confirm(action) => {
            dialogs::confirm::render(frame, action);
        }
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
