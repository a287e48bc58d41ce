//! CSV export
//!
//! One row per expense with an `id,date,category,amount` header.

use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

#[derive(Serialize)]
struct ExpenseRow<'a> {
    id: i64,
    date: &'a str,
    category: &'a str,
    amount: f64,
}

/// Write expenses as CSV and return the number of rows written
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = Writer::from_writer(writer);

    for expense in expenses {
        csv_writer.serialize(ExpenseRow {
            id: expense.id.as_i64(),
            date: &expense.date,
            category: &expense.category,
            amount: expense.amount,
        })?;
    }

    // The header is only emitted with the first row
    if expenses.is_empty() {
        csv_writer.write_record(["id", "date", "category", "amount"])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(expenses.len())
}
