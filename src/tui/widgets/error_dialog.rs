//! Error dialog widget
//!
//! Displays detailed error information with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ExpenseError;
use crate::tui::layout::percent_of;

/// An error dialog with details and suggestions
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from an ExpenseError
    pub fn from_error(error: &ExpenseError) -> Self {
        let (title, details, suggestions) = match error {
            ExpenseError::Validation(msg) => (
                "Validation Error",
                msg.clone(),
                vec![
                    "Fill in the date, category and amount".to_string(),
                    "Enter the amount as a plain number, e.g. 12.50".to_string(),
                ],
            ),
            ExpenseError::StorageUnavailable(msg) => (
                "Storage Unavailable",
                msg.clone(),
                vec![
                    "Check that the data directory exists and is writable".to_string(),
                    "Check if the database is locked by another process".to_string(),
                ],
            ),
            ExpenseError::EmptyDataset => (
                "No Data",
                error.to_string(),
                vec!["Add an expense first".to_string()],
            ),
            ExpenseError::Config(msg) => (
                "Configuration Error",
                msg.clone(),
                vec![
                    "Check config.json for syntax errors".to_string(),
                    "Run 'expenses init' to rewrite the default settings".to_string(),
                ],
            ),
            ExpenseError::Io(msg) => (
                "I/O Error",
                msg.clone(),
                vec![
                    "Check that you have write permissions to the data directory".to_string(),
                    "Ensure there is enough disk space".to_string(),
                ],
            ),
            ExpenseError::Json(msg) => (
                "Data File Error",
                format!("Failed to read or write data: {}", msg),
                vec!["The audit log or settings file may be corrupted".to_string()],
            ),
            ExpenseError::Export(msg) => (
                "Export Error",
                msg.clone(),
                vec!["Check that you have write permissions to the output path".to_string()],
            ),
        };

        Self {
            title: title.to_string(),
            details,
            suggestions,
        }
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];

            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = percent_of(parent.width, 70).clamp(40.min(parent.width), 80.min(parent.width));
    let height = percent_of(parent.height, 50).clamp(10.min(parent.height), 16.min(parent.height));

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
