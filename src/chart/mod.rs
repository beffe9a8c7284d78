//! Chart rendering for dashboard reports.
//!
//! This module converts a report into a static SVG dashboard and into a
//! plain-text summary for the terminal.

pub mod generator;
pub mod summary;

// Re-export main types
pub use generator::{escape_xml, format_volume, generate_dashboard, ChartConfig, MIN_WIDTH};
pub use summary::{generate_category_table, generate_text_summary};
