//! Transaction CLI commands
//!
//! `add`, `edit`, `delete` and `list` are top-level commands of the binary.

use clap::Args;

use super::parse::{parse_amount, parse_date, parse_optional_date, parse_type};
use super::prompt::confirm;
use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::TrackerResult;
use crate::ledger::{LedgerModel, TransactionFilter};
use crate::models::{Transaction, TransactionInput};
use crate::storage::Store;

/// Arguments for `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was for
    pub description: String,
    /// Amount, e.g. "42.50"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// income or expense
    #[arg(short = 't', long = "type")]
    pub kind: String,
    /// Category name
    #[arg(short, long)]
    pub category: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `expense edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Transaction ID (full or prefix)
    pub id: String,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// New amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    /// New type (income or expense)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `expense delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Transaction ID (full or prefix)
    pub id: String,
    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `expense list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only income or only expense
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
    /// Filter by category name
    #[arg(short, long)]
    pub category: Option<String>,
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// Show at most this many transactions
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `expense add`
pub fn handle_add<S: Store, C: Clock>(
    ledger: &mut LedgerModel<S, C>,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let date = match args.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => ledger.clock().today(),
    };

    let input = TransactionInput::new(
        args.description,
        parse_amount(&args.amount)?,
        parse_type(&args.kind)?,
        args.category,
        date,
    );

    let txn = ledger.add_transaction(&input)?;

    println!("Transaction added successfully!");
    print!(
        "{}",
        format_transaction_details(&txn, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Handle `expense edit`; fields not given keep their current values
pub fn handle_edit<S: Store, C: Clock>(
    ledger: &mut LedgerModel<S, C>,
    settings: &Settings,
    args: EditArgs,
) -> TrackerResult<()> {
    let id = ledger.find_transaction(&args.id)?.id.clone();

    if args.description.is_none()
        && args.amount.is_none()
        && args.kind.is_none()
        && args.category.is_none()
        && args.date.is_none()
    {
        println!("No changes specified. Use --description, --amount, --type, --category or --date.");
        return Ok(());
    }

    let current = ledger.edit_transaction(&id)?;
    let result = apply_edits(&current, &args).and_then(|input| ledger.update_transaction(&id, &input));
    let updated = match result {
        Ok(updated) => updated,
        Err(e) => {
            ledger.close_edit();
            return Err(e);
        }
    };

    println!("Transaction updated successfully!");
    print!(
        "{}",
        format_transaction_details(&updated, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

fn apply_edits(
    current: &Transaction,
    args: &EditArgs,
) -> TrackerResult<TransactionInput> {
    let mut input = TransactionInput::from_transaction(current);
    if let Some(description) = &args.description {
        input.description = description.clone();
    }
    if let Some(amount) = &args.amount {
        input.amount = Some(parse_amount(amount)?);
    }
    if let Some(kind) = &args.kind {
        input.kind = Some(parse_type(kind)?);
    }
    if let Some(category) = &args.category {
        input.category = category.clone();
    }
    if let Some(date) = &args.date {
        input.date = Some(parse_date(date)?);
    }
    Ok(input)
}

/// Handle `expense delete`
pub fn handle_delete<S: Store, C: Clock>(
    ledger: &mut LedgerModel<S, C>,
    args: DeleteArgs,
) -> TrackerResult<()> {
    let txn = ledger.find_transaction(&args.id)?.clone();

    if !args.yes && !confirm("Are you sure you want to delete this transaction?")? {
        println!("Cancelled.");
        return Ok(());
    }

    ledger.delete_transaction(&txn.id)?;
    println!("Transaction deleted successfully! ({} {})", txn.id, txn.description);
    Ok(())
}

/// Handle `expense list`
pub fn handle_list<S: Store, C: Clock>(
    ledger: &LedgerModel<S, C>,
    settings: &Settings,
    args: ListArgs,
) -> TrackerResult<()> {
    let filter = TransactionFilter {
        kind: args.kind.as_deref().map(parse_type).transpose()?,
        category: args.category,
        date_from: parse_optional_date(args.from.as_deref())?,
        date_to: parse_optional_date(args.to.as_deref())?,
    };

    let mut transactions = ledger.list_transactions(&filter);
    let total = transactions.len();
    if let Some(limit) = args.limit {
        transactions.truncate(limit);
    }

    println!(
        "{}",
        format_transaction_table(&transactions, &settings.currency_symbol, &settings.date_format)
    );
    if transactions.len() < total {
        println!("Showing {} of {} transactions.", transactions.len(), total);
    }
    Ok(())
}
