//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod categories;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use categories::execute_categories;
pub use models::{CategoryArgs, ReportArgs};
pub use report::{execute_report, resolve_selection, validate_args};
pub use utils::{display_domains, display_schema, display_version, validate_report_file};
