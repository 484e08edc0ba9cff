//! Summary and budget formatting for terminal output

use crate::reports::{BudgetBand, BudgetStatus, Summary};

const BAR_WIDTH: usize = 30;

/// Format the ledger totals
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total income:   {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total expenses: {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!("{:-<31}\n", ""));
    output.push_str(&format!(
        "Balance:        {:>14}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output
}

/// Format the monthly budget status with a usage bar
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    if !status.budget.is_positive() {
        return "No monthly budget set. Use 'expense budget set <amount>'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Monthly budget: {:>14}\n",
        status.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent:          {:>14}\n",
        status.spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:      {:>14}\n",
        status.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "[{}] {}% ({})\n",
        format_bar(status.display_percentage(), BAR_WIDTH),
        status.rounded_percentage(),
        status.band
    ));

    match status.band {
        BudgetBand::Critical if status.is_over_budget() => {
            output.push_str("Over budget for this month.\n")
        }
        BudgetBand::Critical => output.push_str("Almost at the monthly limit.\n"),
        BudgetBand::Warning => output.push_str("More than 75% of the budget is used.\n"),
        BudgetBand::Normal => {}
    }

    output
}

/// Horizontal bar filled in proportion to `percentage` (0 to 100)
pub fn format_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn status(budget: i64, spent: i64) -> BudgetStatus {
        let percentage = if budget > 0 {
            spent as f64 * 100.0 / budget as f64
        } else {
            0.0
        };
        BudgetStatus {
            budget: Money::from_cents(budget),
            spent: Money::from_cents(spent),
            remaining: Money::from_cents(budget - spent),
            percentage,
            band: BudgetBand::for_percentage(percentage),
        }
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            total_income: Money::zero(),
            total_expenses: Money::from_cents(450),
            balance: Money::from_cents(-450),
        };
        let text = format_summary(&summary, "$");
        assert!(text.contains("$4.50"));
        assert!(text.contains("-$4.50"));
    }

    #[test]
    fn test_budget_without_amount() {
        assert!(format_budget_status(&status(0, 500), "$").contains("No monthly budget"));
    }

    #[test]
    fn test_budget_bands() {
        let normal = format_budget_status(&status(10_000, 3_000), "$");
        assert!(normal.contains("30%"));
        assert!(normal.contains("$70.00"));

        let over = format_budget_status(&status(10_000, 15_000), "$");
        assert!(over.contains("150%"));
        assert!(over.contains("Over budget"));
    }

    #[test]
    fn test_bar() {
        assert_eq!(format_bar(0.0, 4), "░░░░");
        assert_eq!(format_bar(50.0, 4), "██░░");
        assert_eq!(format_bar(250.0, 4), "████");
    }
}
