//! Category CLI commands

use clap::Subcommand;

use super::parse::parse_type;
use super::prompt::confirm;
use crate::clock::Clock;
use crate::display::format_category_list;
use crate::error::TrackerResult;
use crate::ledger::LedgerModel;
use crate::storage::Store;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only categories usable for this type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
    /// Delete a category (transactions keep their category label)
    Delete {
        /// Category name (exact match)
        name: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a category command
pub fn handle_category_command<S: Store, C: Clock>(
    ledger: &mut LedgerModel<S, C>,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let kind = kind.as_deref().map(parse_type).transpose()?;
            print!("{}", format_category_list(&ledger.categories_for_type(kind)));
        }

        CategoryCommands::Add { name } => {
            let name = ledger.add_category(&name)?;
            println!("Category added successfully! ({})", name);
        }

        CategoryCommands::Delete { name, yes } => {
            if !ledger.categories().contains(&name) {
                println!("No category named '{}'.", name);
                return Ok(());
            }

            let question = format!("Are you sure you want to delete the category \"{}\"?", name);
            if !yes && !confirm(&question)? {
                println!("Cancelled.");
                return Ok(());
            }

            ledger.delete_category(&name)?;
            println!("Category deleted successfully! ({})", name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn test_add_and_delete() {
        let mut ledger = LedgerModel::load(
            MemoryStore::new(),
            FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
        );

        handle_category_command(&mut ledger, CategoryCommands::Add { name: "Pets".into() })
            .unwrap();
        assert!(ledger.categories().contains("Pets"));

        let err = handle_category_command(&mut ledger, CategoryCommands::Add { name: "Pets".into() })
            .unwrap_err();
        assert!(err.is_validation());

        handle_category_command(
            &mut ledger,
            CategoryCommands::Delete {
                name: "Pets".into(),
                yes: true,
            },
        )
        .unwrap();
        assert!(!ledger.categories().contains("Pets"));
    }
}
