//! Categories command implementation.
//!
//! Lists the product-category composition of one flow for a selection,
//! without writing a report.

use super::models::CategoryArgs;
use super::report::resolve_selection;
use crate::aggregator::{AggregationEngine, CategorySlice};
use crate::chart::generate_category_table;
use crate::data::load_table;
use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

/// Execute the categories command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Table location, selection and the flow to compose
///
/// # Returns
/// The slices printed to stdout: top categories by value, then `OTHER`
///
/// # Errors
/// * Table load failures
/// * Empty table (no default selection)
///
/// # Example
/// ```ignore
/// let args = CategoryArgs {
///     flow: "exports".parse()?,
///     reporter: Some("Austria".to_string()),
///     ..Default::default()
/// };
/// let slices = execute_categories(args)?;
/// ```
pub fn execute_categories(args: CategoryArgs) -> Result<Vec<CategorySlice>> {
    let loaded = load_table(&args.data_path, args.delimiter)
        .with_context(|| format!("Failed to load trade table {}", args.data_path.display()))?;

    if !loaded.rejected.is_empty() {
        warn!(
            "{} of {} rows were rejected during load",
            loaded.rejected.len(),
            loaded.rows_read
        );
    }

    let engine = AggregationEngine::new(Arc::new(loaded.table));
    let selection = resolve_selection(
        args.reporter.as_deref(),
        args.year_from,
        args.year_to,
        engine.table(),
    )?;
    info!("{} ({})", selection.caption(), args.flow);

    let slices = engine.by_category(&selection.reporter, selection.years, args.flow);

    let heading = format!(
        "{} BY PRODUCT CATEGORY (HS2)",
        args.flow.label().to_uppercase()
    );
    println!("{}", generate_category_table(&heading, &slices));

    Ok(slices)
}
