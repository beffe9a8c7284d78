//! Aggregation of trade records into the dashboard views.
//!
//! This module transforms the loaded trade table into:
//! - Trade by partner (bar chart)
//! - Import and export composition by HS2 category (pie charts)
//! - Trade by year (line chart)

pub mod category;
pub mod engine;
pub mod filter;
pub mod partner;
pub mod yearly;

// Re-export main types and functions
pub use category::{compose_categories, display_name, CategorySlice};
pub use engine::{AggregationEngine, DashboardViews};
pub use filter::{filter_rows, reporter_rows, FilterSelection, YearRange};
pub use partner::{aggregate_by_partner, PartnerFlow};
pub use yearly::{aggregate_by_year, YearlyFlow};
