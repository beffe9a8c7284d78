//! Trade table model and loading.
//!
//! This module handles:
//! - The trade record row type and the imports/exports flow selector
//! - Loading a delimited file with per-row rejection
//! - The immutable table and its selector domains

pub mod loader;
pub mod record;
pub mod table;

// Re-export main types
pub use loader::{load_table, read_table, LoadedTable, RowRejection};
pub use record::{Flow, TradeRecord};
pub use table::TradeTable;
