//! Expense display formatting
//!
//! Formats expenses for terminal output as a table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table
///
/// `decimals` controls how many fraction digits amounts show.
pub fn format_expense_list(expenses: &[Expense], decimals: usize) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.clone(),
        category: e.category.clone(),
        amount: format!("{:.*}", decimals, e.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} expense(s), total {:.*}",
        table,
        expenses.len(),
        decimals,
        total
    )
}
