//! Trade Flow Studio
//!
//! Aggregation of bilateral trade-flow tables into dashboard views:
//! trade by partner, import/export composition by HS2 product category,
//! and trade by year for a selected reporting country and year range.
//!
//! The [`aggregator::AggregationEngine`] is the core; it answers pure
//! queries against an immutable [`data::TradeTable`]. Everything else loads
//! the table and renders the results.
//!
//! ```bash
//! trade-flow report --data data/world_trade_extract.csv --svg dashboard.svg --summary
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod data;
pub mod output;
pub mod utils;
