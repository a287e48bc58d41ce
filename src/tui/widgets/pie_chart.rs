//! Pie chart widget
//!
//! Draws filled wedges with block characters. Terminal cells are roughly
//! twice as tall as they are wide, so horizontal distances are halved before
//! measuring the radius. The first wedge starts at 12 o'clock and wedges
//! proceed counter-clockwise.

use std::f64::consts::PI;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::reports::CategoryBreakdown;

/// Colors assigned to slices in order, cycling when there are more slices
pub const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightYellow,
];

/// Color for the slice at `index`
pub fn slice_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Find which slice covers `fraction` of a full turn
///
/// `boundaries` holds the cumulative end of each slice as a fraction of the
/// whole, ascending. Rounding at the end of the circle falls into the last
/// slice.
pub fn slice_index_at(boundaries: &[f64], fraction: f64) -> Option<usize> {
    if boundaries.is_empty() {
        return None;
    }

    let index = boundaries
        .iter()
        .position(|end| fraction < *end)
        .unwrap_or(boundaries.len() - 1);

    Some(index)
}

/// Angle of a point around the center, as a fraction of a turn
///
/// `dx` grows to the right and `dy` grows downwards. 0.0 is straight up,
/// 0.25 is to the left.
pub fn turn_fraction(dx: f64, dy: f64) -> f64 {
    let angle = (-dx).atan2(-dy);
    let angle = if angle < 0.0 { angle + 2.0 * PI } else { angle };
    angle / (2.0 * PI)
}

/// A pie chart of a category breakdown
pub struct PieChart {
    boundaries: Vec<f64>,
}

impl PieChart {
    /// Build the chart from the chartable slices of a breakdown
    pub fn new(breakdown: &CategoryBreakdown) -> Self {
        let mut running = 0.0;
        let boundaries = breakdown
            .slices
            .iter()
            .map(|slice| {
                running += slice.percentage / 100.0;
                running
            })
            .collect();

        Self { boundaries }
    }
}

impl Widget for PieChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.boundaries.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        // Radius in rows; one row spans two columns
        let radius = (f64::from(area.height) / 2.0).min(f64::from(area.width) / 4.0);
        let center_x = f64::from(area.x) + f64::from(area.width) / 2.0;
        let center_y = f64::from(area.y) + f64::from(area.height) / 2.0;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let dx = (f64::from(x) + 0.5 - center_x) / 2.0;
                let dy = f64::from(y) + 0.5 - center_y;

                if dx * dx + dy * dy > radius * radius {
                    continue;
                }

                let fraction = turn_fraction(dx, dy);
                if let Some(index) = slice_index_at(&self.boundaries, fraction) {
                    buf.set_string(x, y, "█", Style::default().fg(slice_color(index)));
                }
            }
        }
    }
}
