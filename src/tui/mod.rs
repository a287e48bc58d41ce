//! Terminal User Interface module
//!
//! The interactive front-end built on ratatui: an entry form, a table of
//! stored expenses, and an analysis overlay with a pie chart.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
