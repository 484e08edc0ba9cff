//! Budget and summary CLI commands

use clap::Subcommand;

use super::parse::parse_amount;
use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_budget_status, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::LedgerModel;
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly spending budget
    Set {
        /// Amount, e.g. "500" or "1,250.00"
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show spending against the budget for the current month
    Show,
}

/// Handle a budget command
pub fn handle_budget_command<S: Store, C: Clock>(
    ledger: &mut LedgerModel<S, C>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            // An unparseable amount counts as no amount at all
            let amount = parse_amount(&amount).ok();
            ledger.set_budget(amount)?;
            println!(
                "Monthly budget updated successfully! ({})",
                ledger.monthly_budget().format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::Show => {
            let status = ledger.current_budget_status();
            println!("Budget for {}", ledger.clock().today().format("%B %Y"));
            print!("{}", format_budget_status(&status, &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Handle `expense summary`
pub fn handle_summary<S: Store, C: Clock>(
    ledger: &LedgerModel<S, C>,
    settings: &Settings,
) -> TrackerResult<()> {
    let summary = ledger.compute_summary();
    println!("{} transactions", ledger.transactions().len());
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::Money;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn test_set_budget() {
        let mut ledger = LedgerModel::load(
            MemoryStore::new(),
            FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
        );
        let settings = Settings::default();

        handle_budget_command(&mut ledger, &settings, BudgetCommands::Set { amount: "250".into() })
            .unwrap();
        assert_eq!(ledger.monthly_budget(), Money::from_cents(25_000));

        for bad in ["0", "-10", "lots"] {
            let err = handle_budget_command(
                &mut ledger,
                &settings,
                BudgetCommands::Set { amount: bad.into() },
            )
            .unwrap_err();
            assert!(matches!(err, TrackerError::InvalidBudgetAmount));
        }
        assert_eq!(ledger.monthly_budget(), Money::from_cents(25_000));
    }
}
