//! Event handler for the TUI
//!
//! Routes keyboard events to the dashboard or to the open dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, ConfirmAction, FocusedPanel};
use super::dialogs;
use super::event::Event;
use crate::clock::Clock;
use crate::storage::Store;

/// Handle an incoming event
pub fn handle_event<S: Store, C: Clock>(app: &mut App<'_, S, C>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key)?,
        Event::Tick | Event::Resize(_, _) => {}
    }

    if let Some(warning) = app.ledger.take_audit_warning() {
        app.set_status(format!("Warning: {}", warning));
    }
    Ok(())
}

fn handle_key_event<S: Store, C: Clock>(app: &mut App<'_, S, C>, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
    Ok(())
}

fn handle_normal_key<S: Store, C: Clock>(app: &mut App<'_, S, C>, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.toggle_panel_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('f') => app.cycle_type_filter(),
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('c') => app.open_dialog(ActiveDialog::AddCategory),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::SetBudget),
        KeyCode::Char('R') => app.open_dialog(ActiveDialog::Confirm(ConfirmAction::ResetAll)),
        KeyCode::Char('e') | KeyCode::Enter => {
            if app.focused_panel == FocusedPanel::Transactions {
                if let Some(txn) = app.selected_transaction() {
                    app.open_dialog(ActiveDialog::EditTransaction(txn.id));
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let action = match app.focused_panel {
                FocusedPanel::Transactions => app
                    .selected_transaction()
                    .map(|txn| ConfirmAction::DeleteTransaction(txn.id)),
                FocusedPanel::Categories => {
                    app.selected_category().map(ConfirmAction::DeleteCategory)
                }
            };
            if let Some(action) = action {
                app.open_dialog(ActiveDialog::Confirm(action));
            }
        }
        _ => {}
    }
}

fn handle_dialog_key<S: Store, C: Clock>(app: &mut App<'_, S, C>, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::AddTransaction | ActiveDialog::EditTransaction(_) => {
            dialogs::transaction::handle_key(app, key)
        }
        ActiveDialog::AddCategory | ActiveDialog::SetBudget => dialogs::prompt::handle_key(app, key),
        ActiveDialog::Confirm(action) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.close_dialog();
                execute_confirmed(app, action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}

/// Carry out an action the user said yes to
fn execute_confirmed<S: Store, C: Clock>(app: &mut App<'_, S, C>, action: ConfirmAction) {
    let result = match action {
        ConfirmAction::DeleteTransaction(id) => app
            .ledger
            .delete_transaction(&id)
            .map(|_| "Transaction deleted successfully!".to_string()),
        ConfirmAction::DeleteCategory(name) => {
            app.ledger.delete_category(&name).map(|removed| {
                if removed {
                    format!("Category \"{}\" deleted", name)
                } else {
                    format!("Category \"{}\" not found", name)
                }
            })
        }
        ConfirmAction::ResetAll => {
            app.open_dialog(ActiveDialog::Confirm(ConfirmAction::ResetAllFinal));
            return;
        }
        ConfirmAction::ResetAllFinal => app
            .ledger
            .reset_all()
            .map(|_| "All data has been cleared".to_string()),
    };

    match result {
        Ok(message) => app.set_status(message),
        Err(e) => app.set_status(format!("Error: {}", e)),
    }
    app.clamp_selection();
}
