//! Export module for the expense tracker
//!
//! Provides dataset export in two formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable export with metadata

pub mod csv;
pub mod json;

pub use csv::export_expenses_csv;
pub use json::{export_expenses_json, FullExport, EXPORT_SCHEMA_VERSION};
