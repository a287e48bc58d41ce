//! JSON export
//!
//! Exports every expense along with export metadata and schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full dataset export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of records
    pub expense_count: usize,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,
}

impl FullExport {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            expenses,
        }
    }
}

/// Write expenses as JSON and return the number of records written
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<usize> {
    let export = FullExport::new(expenses.to_vec());

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(export.expense_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    #[test]
    fn test_export_json() {
        let expenses = vec![Expense {
            id: ExpenseId::from_raw(7),
            date: "2024-01-01".to_string(),
            category: "Food".to_string(),
            amount: 3.25,
        }];

        let mut buffer = Vec::new();
        let count = export_expenses_json(&expenses, &mut buffer, true).unwrap();
        assert_eq!(count, 1);

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.expense_count, 1);
        assert_eq!(parsed.expenses, expenses);
    }

    #[test]
    fn test_export_json_ids_are_plain_numbers() {
        let expenses = vec![Expense {
            id: ExpenseId::from_raw(2),
            date: "2024-01-01".to_string(),
            category: "Rent".to_string(),
            amount: 1.0,
        }];

        let mut buffer = Vec::new();
        export_expenses_json(&expenses, &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["expenses"][0]["id"], 2);
    }
}
