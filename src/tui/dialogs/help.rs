//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Ctrl+Q", "Quit application"),
        key_line("F1", "Show/hide help"),
        key_line("Tab", "Next field / table"),
        key_line("Shift+Tab", "Previous field / table"),
        key_line("F5, Ctrl+R", "Refresh the table"),
        key_line("F6, Ctrl+A", "Analyze expenses"),
        Line::from(""),
        section("Entry Form"),
        Line::from(""),
        key_line("Enter", "Save the expense"),
        key_line("Esc", "Move to the table"),
        Line::from(""),
        section("Expense Table"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Go to top/bottom"),
        key_line("r", "Refresh"),
        key_line("a", "Analyze"),
        key_line("?", "Show help"),
        key_line("q, Esc", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
