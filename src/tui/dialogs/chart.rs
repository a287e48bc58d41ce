//! Expense analysis dialog
//!
//! Overlay holding the category pie chart and its legend

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::reports::CategoryBreakdown;
use crate::tui::layout::{centered_rect, ChartLayout};
use crate::tui::widgets::{slice_color, PieChart};

/// Render the analysis dialog
pub fn render(frame: &mut Frame, breakdown: &CategoryBreakdown, decimals: usize) {
    let area = centered_rect(80, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Expense Analysis ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = ChartLayout::new(inner);

    let title = Paragraph::new("Expense Breakdown by Category")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    if breakdown.is_chartable() {
        frame.render_widget(PieChart::new(breakdown), layout.pie);
    } else {
        let notice = Paragraph::new("Nothing to chart: no category has a positive total.")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, layout.pie);
    }

    let legend = Paragraph::new(legend_lines(breakdown, decimals)).wrap(Wrap { trim: false });
    frame.render_widget(legend, layout.legend);

    let hint = Paragraph::new("Press Esc or Enter to close")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, layout.hint);
}

/// Legend entries: one per slice, then any excluded categories
fn legend_lines(breakdown: &CategoryBreakdown, decimals: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = breakdown
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Line::from(vec![
                Span::styled("██ ", Style::default().fg(slice_color(i))),
                Span::raw(CategoryBreakdown::slice_label(slice)),
                Span::styled(
                    format!("  {:.*}", decimals, slice.total),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    if !breakdown.excluded.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Excluded (zero or negative):",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (category, amount) in &breakdown.excluded {
            lines.push(Line::from(format!("   {} {:.*}", category, decimals, amount)));
        }
    }

    lines
}
