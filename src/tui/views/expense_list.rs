//! Expense list view
//!
//! A three-column table of every stored expense. Rows are a transient copy
//! rebuilt on each refresh.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::services::ExpenseService;
use crate::tui::app::{App, FocusedPanel};

/// Rows currently on display and the selected row
#[derive(Debug, Clone, Default)]
pub struct ExpenseListState {
    /// Displayed rows in insertion order
    pub rows: Vec<Expense>,
    /// Selected row index
    pub selected: usize,
}

impl ExpenseListState {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed rows with a fresh read from storage
    ///
    /// The old rows are dropped first, so a failed read leaves the table empty.
    pub fn refresh(&mut self, service: &ExpenseService) -> ExpenseResult<()> {
        self.rows.clear();
        self.rows = service.list()?;
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        Ok(())
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// Jump to the last row
    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Get the selected expense
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.rows.get(self.selected)
    }
}

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::List;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.list.rows.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .title_bottom(" F5: Refresh ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.list.rows.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the form above and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(15),    // Category
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = app
        .list
        .rows
        .iter()
        .map(|expense| {
            let amount_style = if expense.amount < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(expense.date.clone()),
                Cell::from(expense.category.clone()),
                Cell::from(format!(
                    "{:>14}",
                    app.settings.format_amount(expense.amount)
                ))
                .style(amount_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.list.selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
