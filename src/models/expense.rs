//! Expense record model
//!
//! An expense is a dated amount filed under a free-form category label.
//! Dates are kept as entered; only presence is checked.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use crate::error::{ExpenseError, ExpenseResult};

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by storage
    pub id: ExpenseId,

    /// Date as entered, expected to look like YYYY-MM-DD
    pub date: String,

    /// Category label
    pub category: String,

    /// Amount spent
    pub amount: f64,
}

impl Expense {
    /// Short human-readable description used by the audit log
    pub fn display_name(&self) -> String {
        format!("{} {}", self.date, self.category)
    }
}

/// A validated expense that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: f64,
}

impl NewExpense {
    /// Validate raw form input
    ///
    /// Every field must be non-empty after trimming, and the amount must parse
    /// as a finite floating-point number. The trimmed text is what gets stored,
    /// so `" Food "` and `"Food"` are the same category. The date is not
    /// checked for format.
    pub fn parse(date: &str, category: &str, amount: &str) -> ExpenseResult<Self> {
        let date = date.trim();
        let category = category.trim();
        let amount_text = amount.trim();

        if date.is_empty() {
            return Err(ExpenseError::missing_field("date"));
        }
        if category.is_empty() {
            return Err(ExpenseError::missing_field("category"));
        }
        if amount_text.is_empty() {
            return Err(ExpenseError::missing_field("amount"));
        }

        let amount = amount_text
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| ExpenseError::not_a_number(amount_text))?;

        Ok(Self {
            date: date.to_string(),
            category: category.to_string(),
            amount,
        })
    }

    /// Attach the identifier storage assigned
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            amount: self.amount,
        }
    }
}
