//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: entry form, expense table, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the entry form panel including borders
const FORM_HEIGHT: u16 = 7;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Entry form at the top
    pub form: Rect,
    /// Expense table
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT), // Entry form
                Constraint::Min(3),              // Expense table
                Constraint::Length(1),           // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            list: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the chart dialog body
pub struct ChartLayout {
    /// Chart title line
    pub title: Rect,
    /// Pie area
    pub pie: Rect,
    /// Legend beside the pie
    pub legend: Rect,
    /// Close hint
    pub hint: Rect,
}

impl ChartLayout {
    /// Calculate chart dialog layout
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(3),    // Pie and legend
                Constraint::Length(1), // Hint
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        Self {
            title: vertical[0],
            pie: horizontal[0],
            legend: horizontal[1],
            hint: vertical[2],
        }
    }
}

/// `percent`% of a terminal dimension, widened so large sizes do not overflow
pub fn percent_of(len: u16, percent: u16) -> u16 {
    (u32::from(len) * u32::from(percent) / 100).min(u32::from(u16::MAX)) as u16
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
