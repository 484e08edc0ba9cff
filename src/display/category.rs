//! Category list formatting

use crate::models::{is_eligible, TransactionType};

/// Format category names, marking which transaction types each accepts
pub fn format_category_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No categories found.".to_string();
    }

    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {}\n", "Name", "Used for", width = width));
    output.push_str(&format!("{:-<width$}  {:-<16}\n", "", "", width = width));

    for name in names {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            name,
            usage_label(name),
            width = width
        ));
    }

    output.push_str(&format!("\n{} categories\n", names.len()));
    output
}

fn usage_label(name: &str) -> &'static str {
    match (
        is_eligible(name, TransactionType::Income),
        is_eligible(name, TransactionType::Expense),
    ) {
        (true, true) => "income, expense",
        (true, false) => "income",
        _ => "expense",
    }
}
