//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod error_dialog;
pub mod input;
pub mod notification;
pub mod pie_chart;

// Re-export commonly used widgets
pub use error_dialog::{error_dialog_area, ErrorDialog, ErrorInfo};
pub use input::TextInput;
pub use notification::{notification_area, Notification, NotificationType, NotificationWidget};
pub use pie_chart::{slice_color, PieChart};
