//! Service layer for the expense tracker
//!
//! The service layer sits between the presentation (TUI and CLI) and the
//! storage layer, handling validation and audit logging.

pub mod expense;

pub use expense::{ExpenseService, Submission};
