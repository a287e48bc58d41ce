//! Expense CLI commands
//!
//! Non-interactive counterparts of the form, list and analysis views.

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Handle `add`
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    date: &str,
    category: &str,
    amount: &str,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let submission = service.submit(date, category, amount)?;
    let expense = &submission.expense;

    println!(
        "Added {}: {} {} {}",
        expense.id,
        expense.date,
        expense.category,
        settings.format_amount(expense.amount)
    );
    if let Some(e) = &submission.audit_error {
        eprintln!("Warning: expense was saved but not written to the audit log: {}", e);
    }

    Ok(())
}

/// Handle `list`, showing the most recent `limit` records when given
pub fn handle_list(storage: &Storage, settings: &Settings, limit: Option<usize>) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expenses = service.list()?;

    let start = limit.map_or(0, |n| expenses.len().saturating_sub(n));
    println!("{}", format_expense_list(&expenses[start..], settings.amount_decimals));

    Ok(())
}

/// Handle `summary`
///
/// An empty store is reported as a notice, not a failure.
pub fn handle_summary(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match service.analyze() {
        Ok(breakdown) => {
            print!("{}", breakdown.format_terminal(settings.amount_decimals));
            Ok(())
        }
        Err(ExpenseError::EmptyDataset) => {
            println!("No expenses to analyze.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
