//! Dialog overlays
//!
//! Modal surfaces drawn above the main view.

pub mod chart;
pub mod help;
