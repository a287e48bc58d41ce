//! Storage initialization
//!
//! Creates the `expenses` table on first run. Safe to call on every start.

use rusqlite::Connection;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

use super::Storage;

/// DDL for the single table the tracker owns
const CREATE_EXPENSES_TABLE: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT,
    category TEXT,
    amount REAL
)";

/// Create the schema on an open connection if it is missing
pub fn create_schema(conn: &Connection) -> ExpenseResult<()> {
    conn.execute(CREATE_EXPENSES_TABLE, [])?;
    Ok(())
}

/// Initialize storage for the given paths and return the handle
///
/// Creates the data directory and the `expenses` table if absent.
pub fn initialize_storage(paths: &ExpensePaths) -> ExpenseResult<Storage> {
    Storage::initialize(paths.clone())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensePaths) -> bool {
    !paths.database_file().exists()
}
