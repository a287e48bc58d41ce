//! Entry form view
//!
//! Three text inputs for date, category and amount. The form only collects
//! text; validation happens in the service on submit.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::TextInput;

const LABEL_WIDTH: u16 = 10;

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Category,
    Amount,
}

impl FormField {
    /// Get the next field, `None` after the last one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Date => Some(Self::Category),
            Self::Category => Some(Self::Amount),
            Self::Amount => None,
        }
    }

    /// Get the previous field, `None` before the first one
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Date => None,
            Self::Category => Some(Self::Date),
            Self::Amount => Some(Self::Category),
        }
    }
}

/// State for the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Currently focused field
    pub focused_field: FormField,

    /// Date input
    pub date_input: TextInput,

    /// Category input
    pub category_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl EntryFormState {
    /// Create a new form, optionally with today's date filled in
    pub fn new(prefill_today: bool) -> Self {
        let mut date_input = TextInput::new()
            .label("Date")
            .label_width(LABEL_WIDTH)
            .placeholder("YYYY-MM-DD");
        if prefill_today {
            date_input = date_input.content(Local::now().date_naive().format("%Y-%m-%d").to_string());
        }

        let mut state = Self {
            focused_field: FormField::Date,
            date_input,
            category_input: TextInput::new()
                .label("Category")
                .label_width(LABEL_WIDTH)
                .placeholder("e.g. Food"),
            amount_input: TextInput::new()
                .label("Amount")
                .label_width(LABEL_WIDTH)
                .placeholder("e.g. 12.50"),
        };
        state.set_focus(FormField::Date);
        state
    }

    /// Move to the next field; returns false when already on the last one
    pub fn next_field(&mut self) -> bool {
        match self.focused_field.next() {
            Some(field) => {
                self.set_focus(field);
                true
            }
            None => false,
        }
    }

    /// Move to the previous field; returns false when already on the first one
    pub fn prev_field(&mut self) -> bool {
        match self.focused_field.prev() {
            Some(field) => {
                self.set_focus(field);
                true
            }
            None => false,
        }
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.date_input.focused = field == FormField::Date;
        self.category_input.focused = field == FormField::Category;
        self.amount_input.focused = field == FormField::Amount;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Date => &mut self.date_input,
            FormField::Category => &mut self.category_input,
            FormField::Amount => &mut self.amount_input,
        }
    }

    /// Raw text of the three inputs
    pub fn values(&self) -> (&str, &str, &str) {
        (
            self.date_input.value(),
            self.category_input.value(),
            self.amount_input.value(),
        )
    }

    /// Clear category and amount after a successful save; the date is kept
    pub fn reset_after_submit(&mut self) {
        self.category_input.clear();
        self.amount_input.clear();
        self.set_focus(FormField::Category);
    }
}

/// Render the entry form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Form;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" New Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;
    // Inputs only show a cursor while the form panel has focus
    for (input, chunk) in [
        (&form.date_input, chunks[0]),
        (&form.category_input, chunks[1]),
        (&form.amount_input, chunks[2]),
    ] {
        if is_focused {
            frame.render_widget(input, chunk);
        } else {
            let mut unfocused = input.clone();
            unfocused.focused = false;
            frame.render_widget(&unfocused, chunk);
        }
    }

    let hint = Paragraph::new("Enter: Save  Tab: Next field  F6: Analyze")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_focuses_date() {
        let form = EntryFormState::new(false);
        assert_eq!(form.focused_field, FormField::Date);
        assert!(form.date_input.focused);
        assert!(!form.amount_input.focused);
        assert_eq!(form.values(), ("", "", ""));
    }

    #[test]
    fn test_prefill_today() {
        let form = EntryFormState::new(true);
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(form.date_input.value(), today);
    }

    #[test]
    fn test_field_navigation_stops_at_edges() {
        let mut form = EntryFormState::new(false);

        assert!(!form.prev_field());
        assert!(form.next_field());
        assert!(form.next_field());
        assert_eq!(form.focused_field, FormField::Amount);
        assert!(!form.next_field());
        assert!(form.amount_input.focused);
    }

    #[test]
    fn test_typing_goes_to_focused_input() {
        let mut form = EntryFormState::new(false);
        form.set_focus(FormField::Category);
        for c in "Food".chars() {
            form.focused_input().insert(c);
        }
        assert_eq!(form.values(), ("", "Food", ""));
    }

    #[test]
    fn test_reset_after_submit_keeps_date() {
        let mut form = EntryFormState::new(false);
        form.date_input = TextInput::new().content("2024-01-01");
        form.category_input = TextInput::new().content("Food");
        form.amount_input = TextInput::new().content("3");

        form.reset_after_submit();

        assert_eq!(form.values(), ("2024-01-01", "", ""));
        assert_eq!(form.focused_field, FormField::Category);
    }
}
