//! Expense service
//!
//! Submit, list and analyze expenses. Both front-ends go through here.

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, NewExpense};
use crate::reports::CategoryBreakdown;
use crate::storage::Storage;

/// Outcome of a submit that reached storage
///
/// The row is committed once `insert` succeeds. A failed audit write is
/// carried alongside instead of failing the submit.
#[derive(Debug)]
pub struct Submission {
    pub expense: Expense,
    pub audit_error: Option<ExpenseError>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate raw input and store a new expense
    ///
    /// Nothing is written when validation fails.
    pub fn submit(&self, date: &str, category: &str, amount: &str) -> ExpenseResult<Submission> {
        let new = NewExpense::parse(date, category, amount)?;

        let id = self.storage.expenses.insert(&new)?;
        let expense = new.into_expense(id);

        // Audit log
        let audit_error = self
            .storage
            .log_create(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.display_name()),
                &expense,
            )
            .err();

        Ok(Submission {
            expense,
            audit_error,
        })
    }

    /// List all expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.list_all()
    }

    /// Count stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }

    /// Aggregate amounts by category
    ///
    /// Returns `EmptyDataset` when there are no records.
    pub fn analyze(&self) -> ExpenseResult<CategoryBreakdown> {
        let totals = self.storage.expenses.sum_by_category()?;
        if totals.is_empty() {
            return Err(ExpenseError::EmptyDataset);
        }

        Ok(CategoryBreakdown::from_totals(&totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::initialize(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_submit_then_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.submit("2024-03-01", "Food", "12.50").unwrap().expense;

        let all = service.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], expense);
        assert_eq!(all[0].date, "2024-03-01");
        assert_eq!(all[0].category, "Food");
        assert_eq!(all[0].amount, 12.5);
    }

    #[test]
    fn test_submit_assigns_fresh_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let first = service.submit("2024-03-01", "Food", "1").unwrap().expense;
        let second = service.submit("2024-03-01", "Food", "1").unwrap().expense;

        assert_ne!(first.id, second.id);
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_submit_with_empty_field_writes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        for (date, category, amount) in [("", "Food", "1"), ("2024-01-01", "", "1"), ("2024-01-01", "Food", " ")] {
            let err = service.submit(date, category, amount).unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(service.count().unwrap(), 0);
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_submit_with_non_numeric_amount_writes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.submit("2024-01-01", "Food", "5").unwrap();

        let err = service.submit("2024-01-02", "Food", "abc").unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("not a number"));
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_submit_writes_audit_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let submission = service.submit("2024-01-01", "Books", "30").unwrap();
        assert!(submission.audit_error.is_none());

        let expense = submission.expense;
        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, expense.id.to_string());
        assert_eq!(entries[0].entity_name.as_deref(), Some("2024-01-01 Books"));
    }

    #[test]
    fn test_audit_failure_keeps_stored_row() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = ExpenseService::new(&storage);

        let submission = service.submit("2024-01-01", "Food", "5").unwrap();

        assert!(matches!(submission.audit_error, Some(ExpenseError::Io(_))));
        assert_eq!(service.list().unwrap(), vec![submission.expense]);
    }

    #[test]
    fn test_padded_category_is_stored_trimmed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.submit("2024-01-01", " Food ", "5").unwrap();
        service.submit("2024-01-02", "Food", "7").unwrap();

        assert_eq!(service.list().unwrap()[0].category, "Food");
        let breakdown = service.analyze().unwrap();
        assert_eq!(breakdown.category_count(), 1);
        assert_eq!(breakdown.slices[0].total, 12.0);
    }

    #[test]
    fn test_analyze_empty_store() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.analyze().unwrap_err();
        assert!(matches!(err, ExpenseError::EmptyDataset));
        assert!(err.is_informational());
    }

    #[test]
    fn test_analyze_groups_by_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.submit("2024-01-01", "Food", "10").unwrap();
        service.submit("2024-01-02", "Food", "5").unwrap();
        service.submit("2024-01-03", "Transport", "20").unwrap();

        let breakdown = service.analyze().unwrap();
        assert_eq!(breakdown.slices.len(), 2);
        assert_eq!(breakdown.slices[0].category, "Food");
        assert_eq!(breakdown.slices[0].total, 15.0);
        assert_eq!(breakdown.slices[1].category, "Transport");
        assert_eq!(breakdown.slices[1].total, 20.0);
        assert_eq!(breakdown.total, 35.0);
    }
}
