//! Expense repository backed by SQLite
//!
//! Every call opens its own connection and drops it before returning.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rusqlite::{params, Connection};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, NewExpense};

use super::init::create_schema;

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository for the database at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn connect(&self) -> ExpenseResult<Connection> {
        Connection::open(&self.path).map_err(|e| {
            ExpenseError::StorageUnavailable(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Create the `expenses` table if it does not exist
    pub fn ensure_schema(&self) -> ExpenseResult<()> {
        let conn = self.connect()?;
        create_schema(&conn)
    }

    /// Append one record and return the identifier storage assigned
    pub fn insert(&self, expense: &NewExpense) -> ExpenseResult<ExpenseId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO expenses (date, category, amount) VALUES (?1, ?2, ?3)",
            params![expense.date, expense.category, expense.amount],
        )?;

        Ok(ExpenseId::from_raw(conn.last_insert_rowid()))
    }

    /// Get all records in insertion order
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, date, category, amount FROM expenses ORDER BY id")?;

        let expenses = stmt
            .query_map([], |row| {
                Ok(Expense {
                    id: ExpenseId::from_raw(row.get(0)?),
                    date: row.get(1)?,
                    category: row.get(2)?,
                    amount: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Total amount per category; empty when there are no records
    pub fn sum_by_category(&self) -> ExpenseResult<BTreeMap<String, f64>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT category, SUM(amount) FROM expenses GROUP BY category")?;

        let totals = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(totals)
    }

    /// Count records
    pub fn count(&self) -> ExpenseResult<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.db"));
        repo.ensure_schema().unwrap();
        (temp_dir, repo)
    }

    fn new_expense(date: &str, category: &str, amount: f64) -> NewExpense {
        NewExpense {
            date: date.to_string(),
            category: category.to_string(),
            amount,
        }
    }

    #[test]
    fn test_empty_repository() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.list_all().unwrap().is_empty());
        assert!(repo.sum_by_category().unwrap().is_empty());
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let (_temp_dir, repo) = create_test_repo();

        let first = repo.insert(&new_expense("2024-01-01", "Food", 10.0)).unwrap();
        let second = repo.insert(&new_expense("2024-01-02", "Food", 5.0)).unwrap();

        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();

        let id = repo.insert(&new_expense("2024-01-05", "Rent", 900.0)).unwrap();
        repo.insert(&new_expense("2024-01-01", "Food", 12.5)).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].category, "Rent");
        assert_eq!(all[1].amount, 12.5);
    }

    #[test]
    fn test_sum_by_category() {
        let (_temp_dir, repo) = create_test_repo();

        repo.insert(&new_expense("2024-01-01", "Food", 10.0)).unwrap();
        repo.insert(&new_expense("2024-01-02", "Food", 5.0)).unwrap();
        repo.insert(&new_expense("2024-01-03", "Transport", 20.0)).unwrap();

        let totals = repo.sum_by_category().unwrap();

        let expected: BTreeMap<String, f64> =
            [("Food".to_string(), 15.0), ("Transport".to_string(), 20.0)]
                .into_iter()
                .collect();
        assert_eq!(totals, expected);
    }

    #[test]
    fn test_ensure_schema_twice_keeps_data() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(&new_expense("2024-01-01", "Food", 1.0)).unwrap();

        repo.ensure_schema().unwrap();

        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_unopenable_path_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("missing").join("expenses.db"));

        let err = repo.ensure_schema().unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_data_persists_across_repositories() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert(&new_expense("2024-01-01", "Books", 30.0)).unwrap();

        let reopened = ExpenseRepository::new(temp_dir.path().join("expenses.db"));
        let all = reopened.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, "Books");
    }
}
