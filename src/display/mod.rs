//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and the audit history for
//! non-interactive commands.

pub mod expense;

pub use expense::format_expense_list;

use crate::audit::AuditEntry;

/// Format audit entries one per line, oldest first
pub fn format_audit_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.".to_string();
    }

    entries
        .iter()
        .map(|e| e.format_human_readable())
        .collect::<Vec<_>>()
        .join("\n")
}
