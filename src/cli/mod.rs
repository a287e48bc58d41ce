//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;

pub use expense::{handle_add, handle_list, handle_summary};
pub use export::{handle_export, ExportFormat};

use crate::display::format_audit_history;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Handle `history`
pub fn handle_history(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    println!("{}", format_audit_history(&entries));
    Ok(())
}
