//! Expense Tracker - record personal expenses and chart them by category
//!
//! This library provides the core functionality for the `expenses` binary:
//! a terminal form for entering expenses, a table listing every stored
//! record, and a pie chart of totals per category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: The expense record
//! - `storage`: SQLite storage layer
//! - `services`: Submit, list and analyze
//! - `reports`: Category breakdown
//! - `audit`: Audit logging system
//! - `display` / `export`: Non-interactive output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::initialize(ExpensePaths::new()?)?;
//! let expense = ExpenseService::new(&storage).submit("2024-03-01", "Food", "12.50")?.expense;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
