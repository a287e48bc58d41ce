//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It moves through `Initializing`, `Ready` and `Closed`; the first list
//! refresh moves it to `Ready` whether or not that refresh succeeded.

use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::reports::CategoryBreakdown;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::views::entry_form::{EntryFormState, FormField};
use super::views::expense_list::ExpenseListState;
use super::widgets::{ErrorInfo, Notification};

/// Lifecycle of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Initializing,
    Ready,
    Closed,
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    List,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// The analysis surface with its pie chart
    Chart(CategoryBreakdown),
    /// Blocking informational or success notice
    Notice(Notification),
    /// Blocking error
    Error(ErrorInfo),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Lifecycle state
    pub state: ShellState,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Entry form state
    pub form: EntryFormState,

    /// Expense table state
    pub list: ExpenseListState,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            state: ShellState::Initializing,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            form: EntryFormState::new(settings.prefill_today),
            list: ExpenseListState::new(),
            status_message: None,
        }
    }

    /// Populate the list and enter `Ready`
    pub fn start(&mut self) {
        if self.state != ShellState::Initializing {
            return;
        }
        self.refresh_list();
        self.state = ShellState::Ready;
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.state = ShellState::Closed;
    }

    /// Whether the event loop should stop
    pub fn should_quit(&self) -> bool {
        self.state == ShellState::Closed
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn service(&self) -> ExpenseService<'a> {
        ExpenseService::new(self.storage)
    }

    /// Validate the form and store a new expense
    pub fn submit_form(&mut self) {
        let (date, category, amount) = self.form.values();
        let result = self.service().submit(date, category, amount);

        match result {
            Ok(submission) => {
                // The row is stored, so the form and table move on either way
                self.form.reset_after_submit();
                self.refresh_list();
                self.list.select_last();
                if self.has_dialog() {
                    return;
                }
                self.set_status(format!("Saved {}", submission.expense.id));
                let notice = match submission.audit_error {
                    None => Notification::success("Expense added successfully!"),
                    Some(e) => Notification::info(format!(
                        "Expense added, but the audit log could not be written ({})",
                        e
                    )),
                };
                self.open_dialog(ActiveDialog::Notice(notice));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Reload the table from storage
    pub fn refresh_list(&mut self) {
        let service = self.service();
        match self.list.refresh(&service) {
            Ok(()) => self.set_status(format!("{} expense(s) loaded", self.list.rows.len())),
            Err(e) => self.show_error(&e),
        }
    }

    /// Aggregate by category and open the chart
    pub fn analyze(&mut self) {
        match self.service().analyze() {
            Ok(breakdown) => self.open_dialog(ActiveDialog::Chart(breakdown)),
            Err(e) => self.show_error(&e),
        }
    }

    /// Show an error as a blocking dialog, or as a notice when it is informational
    pub fn show_error(&mut self, error: &ExpenseError) {
        let dialog = if error.is_informational() {
            ActiveDialog::Notice(Notification::info(error.to_string()))
        } else {
            ActiveDialog::Error(ErrorInfo::from_error(error))
        };
        self.open_dialog(dialog);
    }

    /// Move focus forward: Date, Category, Amount, then the table
    pub fn focus_next(&mut self) {
        match self.focused_panel {
            FocusedPanel::Form => {
                if !self.form.next_field() {
                    self.focused_panel = FocusedPanel::List;
                }
            }
            FocusedPanel::List => {
                self.focused_panel = FocusedPanel::Form;
                self.form.set_focus(FormField::Date);
            }
        }
    }

    /// Move focus backward
    pub fn focus_prev(&mut self) {
        match self.focused_panel {
            FocusedPanel::Form => {
                if !self.form.prev_field() {
                    self.focused_panel = FocusedPanel::List;
                }
            }
            FocusedPanel::List => {
                self.focused_panel = FocusedPanel::Form;
                self.form.set_focus(FormField::Amount);
            }
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}
