//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Category composition keeps this many groups verbatim before collapsing the rest
pub const TOP_CATEGORIES: usize = 10;

/// HS2 code reserved for the synthetic collapse row
pub const OTHER_CODE: u32 = 999;

/// Name of the synthetic collapse row
pub const OTHER_NAME: &str = "OTHER";

/// Category names longer than this are cut for display
pub const DISPLAY_NAME_LIMIT: usize = 32;

/// Marker appended to cut category names
pub const ELLIPSIS: &str = "...";

/// Reporter selected when none is given and it exists in the data
pub const DEFAULT_REPORTER: &str = "Austria";

/// Width of the default year window (inclusive)
pub const DEFAULT_YEAR_WINDOW: i32 = 3;

/// Environment variable consulted for the source table path
pub const DATA_PATH_ENV: &str = "TRADE_FLOW_DATA";

// Column headers of the source table
pub const COL_REPORTER: &str = "REPORTER";
pub const COL_PARTNER: &str = "PARTNER";
pub const COL_YEAR: &str = "YEAR";
pub const COL_HS2: &str = "HS2";
pub const COL_HS2_NAME: &str = "HS2_NAME";
pub const COL_IMPORTS: &str = "IMPORTS_MN";
pub const COL_EXPORTS: &str = "EXPORTS_MN";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_REPORTER,
    COL_PARTNER,
    COL_YEAR,
    COL_HS2,
    COL_HS2_NAME,
    COL_IMPORTS,
    COL_EXPORTS,
];
