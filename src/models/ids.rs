//! Strongly-typed ID wrapper for expense records
//!
//! Storage assigns the integer key; wrapping it keeps row indexes and
//! record identifiers from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by storage on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw row id
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying row id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", self.0)
    }
}
