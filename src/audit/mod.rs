//! Audit logging for the expense tracker
//!
//! Records every create and export operation in an append-only audit log.
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information and the JSON of the affected record.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.display_name()),
//!     &expense,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
