//! CLI command for data export
//!
//! Writes every expense to a file, or to stdout when no output is given.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON with export metadata
    Json,
}

impl ExportFormat {
    fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Handle `export`
pub fn handle_export(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list()?;

    let (count, destination) = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            let count = write_export(&expenses, format, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            (count, path.display().to_string())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let count = write_export(&expenses, format, &mut handle, pretty)?;
            (count, "stdout".to_string())
        }
    };

    storage.log_export(destination.clone(), format.as_str(), count)?;

    if output.is_some() {
        println!("Exported {} expense(s) to: {}", count, destination);
    }

    Ok(())
}

fn write_export<W: Write>(
    expenses: &[crate::models::Expense],
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<usize> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer, pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::initialize(paths).unwrap();
        ExpenseService::new(&storage)
            .submit("2024-01-01", "Food", "4")
            .unwrap();

        let output = temp_dir.path().join("out.csv");
        handle_export(&storage, ExportFormat::Csv, Some(output.clone()), false).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("id,date,category,amount"));
        assert!(contents.contains("Food"));

        let last = storage.audit().read_recent(1).unwrap();
        assert_eq!(last[0].operation, Operation::Export);
        assert_eq!(last[0].entity_name.as_deref(), Some("csv"));
    }
}
