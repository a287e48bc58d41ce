//! Core data models for the expense tracker
//!
//! A single entity, the expense record, plus its identifier type.

pub mod expense;
pub mod ids;

pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
