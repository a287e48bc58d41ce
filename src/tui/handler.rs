//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if handle_global_key(app, key) {
        return Ok(());
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::List => handle_list_key(app, key),
    }
}

/// Keys that work regardless of focus; returns true when consumed
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') if ctrl => app.quit(),
        KeyCode::Char('r') if ctrl => app.refresh_list(),
        KeyCode::Char('a') if ctrl => app.analyze(),
        KeyCode::F(5) => app.refresh_list(),
        KeyCode::F(6) => app.analyze(),
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => return false,
    }

    true
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let close = match app.active_dialog {
        // Any key closes help
        ActiveDialog::Help => true,
        ActiveDialog::Chart(_) | ActiveDialog::Notice(_) | ActiveDialog::Error(_) => {
            matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q'))
        }
        ActiveDialog::None => false,
    };

    if close {
        app.close_dialog();
    }

    Ok(())
}

/// Handle keys when the entry form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.focused_panel = FocusedPanel::List,
        KeyCode::Up => {
            app.form.prev_field();
        }
        KeyCode::Down => {
            app.form.next_field();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.focused_input().insert(c);
        }
        KeyCode::Backspace => app.form.focused_input().backspace(),
        KeyCode::Delete => app.form.focused_input().delete(),
        KeyCode::Left => app.form.focused_input().move_left(),
        KeyCode::Right => app.form.focused_input().move_right(),
        KeyCode::Home => app.form.focused_input().move_start(),
        KeyCode::End => app.form.focused_input().move_end(),
        _ => {}
    }

    Ok(())
}

/// Handle keys when the expense table is focused
fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('j') | KeyCode::Down => app.list.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.list.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.list.selected = 0,
        KeyCode::Char('G') | KeyCode::End => app.list.select_last(),
        KeyCode::Char('r') => app.refresh_list(),
        KeyCode::Char('a') => app.analyze(),
        KeyCode::Enter => {
            if let Some(expense) = app.list.selected_expense() {
                let summary = format!(
                    "{} {} {}",
                    expense.date,
                    expense.category,
                    app.settings.format_amount(expense.amount)
                );
                app.set_status(summary);
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use crate::tui::app::ShellState;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::initialize(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings {
            prefill_today: false,
            ..Settings::default()
        };
        (temp_dir, storage, settings)
    }

    #[test]
    fn test_enter_expense_with_keyboard() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings);
        app.start();

        type_text(&mut app, "2024-05-01");
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "Books");
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "19.99");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 1);
        assert_eq!(app.list.rows[0].category, "Books");
        assert!(app.has_dialog());

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_q_types_into_form_but_quits_from_list() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings);
        app.start();

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert_eq!(app.state, ShellState::Ready);
        assert_eq!(app.form.date_input.value(), "q");

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.focused_panel, FocusedPanel::List);
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert_eq!(app.state, ShellState::Closed);
    }

    #[test]
    fn test_ctrl_q_quits_from_form() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings);
        app.start();

        handle_event(&mut app, ctrl('q')).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_analyze_key_on_empty_store() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings);
        app.start();

        handle_event(&mut app, key(KeyCode::F(6))).unwrap();
        assert!(matches!(app.active_dialog, ActiveDialog::Notice(_)));

        // Other keys are swallowed while the notice is open
        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.has_dialog());
        assert_eq!(app.form.date_input.value(), "");

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings);
        app.start();

        handle_event(&mut app, key(KeyCode::F(1))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        handle_event(&mut app, key(KeyCode::Char('z'))).unwrap();
        assert!(!app.has_dialog());
    }
}
