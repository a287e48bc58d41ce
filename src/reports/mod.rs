//! Reports module for the expense tracker
//!
//! Provides the category breakdown used by the analysis chart and the
//! `summary` command.

pub mod breakdown;

pub use breakdown::{CategoryBreakdown, CategorySlice};
