//! TUI Views module
//!
//! Contains the entry form, the expense table and the status bar, plus the
//! dispatch to whichever dialog is open.

pub mod entry_form;
pub mod expense_list;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{error_dialog_area, notification_area, ErrorDialog, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    entry_form::render(frame, app, layout.form);
    expense_list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::Chart(breakdown) => {
            dialogs::chart::render(frame, breakdown, app.settings.amount_decimals);
        }
        ActiveDialog::Notice(notification) => {
            frame.render_widget(NotificationWidget::new(notification), notification_area(area));
        }
        ActiveDialog::Error(info) => {
            frame.render_widget(ErrorDialog::new(info), error_dialog_area(area));
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::services::ExpenseService;
    use crate::storage::Storage;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::TempDir;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_main_screen() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::initialize(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        ExpenseService::new(&storage)
            .submit("2024-01-01", "Groceries", "42")
            .unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.start();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("New Expense"));
        assert!(text.contains("Category"));
        assert!(text.contains("Expenses (1)"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("42.00"));
    }

    #[test]
    fn test_render_chart_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::initialize(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let service = ExpenseService::new(&storage);
        service.submit("2024-01-01", "Food", "10").unwrap();
        service.submit("2024-01-01", "Rent", "30").unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.start();
        app.analyze();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Expense Analysis"));
        assert!(text.contains("Expense Breakdown by Category"));
        assert!(text.contains("Food 25.0%"));
        assert!(text.contains("Rent 75.0%"));
        assert!(text.contains("█"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::initialize(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.start();
        app.analyze();

        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }
}
