//! Storage layer for the expense tracker
//!
//! Owns the SQLite database file and the audit log. `Storage::initialize`
//! is called once at startup and the handle is passed to everything else.

pub mod expenses;
pub mod init;

pub use expenses::ExpenseRepository;
pub use init::{initialize_storage, needs_initialization};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Open storage for the given paths, creating the directory and schema
    pub fn initialize(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let storage = Self {
            expenses: ExpenseRepository::new(paths.database_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        };
        storage.expenses.ensure_schema()?;

        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an export in the audit log
    pub fn log_export(
        &self,
        destination: impl Into<String>,
        format: &str,
        record_count: usize,
    ) -> Result<(), ExpenseError> {
        self.audit
            .log(&AuditEntry::export(destination, format, record_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_storage_initialize() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("data"));
        let storage = Storage::initialize(paths).unwrap();

        assert!(temp_dir.path().join("data").join("expenses.db").exists());
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_log_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::initialize(paths).unwrap();

        storage.log_export("stdout", "json", 2).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Export);
    }
}
