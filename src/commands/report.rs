//! Report command implementation.
//!
//! The report command:
//! 1. Loads the trade table
//! 2. Resolves the filter selection
//! 3. Runs the four aggregation queries
//! 4. Writes the JSON report
//! 5. Renders the SVG dashboard (optional)

use super::models::ReportArgs;
use crate::aggregator::{AggregationEngine, FilterSelection, YearRange};
use crate::chart::{generate_dashboard, generate_text_summary};
use crate::data::{load_table, TradeTable};
use crate::output::{write_report, write_svg, DashboardReport};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Table location, selection, output paths and chart options
///
/// # Returns
/// The report that was written to `args.output_json`
///
/// # Errors
/// * Table load failures
/// * Empty table (no default selection)
/// * Chart rendering errors
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = ReportArgs {
///     data_path: PathBuf::from("data/world_trade_extract.csv"),
///     reporter: Some("Austria".to_string()),
///     output_svg: Some(PathBuf::from("dashboard.svg")),
///     chart_config: Some(ChartConfig::new()),
///     ..Default::default()
/// };
/// let report = execute_report(args)?;
/// ```
pub fn execute_report(args: ReportArgs) -> Result<DashboardReport> {
    let start_time = Instant::now();

    // Step 1: Load table
    info!("Step 1/5: Loading trade table...");
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

    // Step 2: Resolve selection
    info!("Step 2/5: Resolving filter selection...");
    let selection = resolve_selection(
        args.reporter.as_deref(),
        args.year_from,
        args.year_to,
        engine.table(),
    )?;
    info!("{}", selection.caption());

    if selection.years.is_inverted() {
        warn!(
            "Year range {} is inverted; partner and category views will be empty",
            selection.years
        );
    }
    if !engine.table().contains_reporter(&selection.reporter) {
        warn!(
            "Reporter '{}' is not present in the table; all views will be empty",
            selection.reporter
        );
    }

    // Step 3: Aggregate
    info!("Step 3/5: Computing views...");
    let views = engine.views(&selection);
    debug!(
        "Views: {} partners, {} import slices, {} export slices, {} years",
        views.partners.len(),
        views.import_categories.len(),
        views.export_categories.len(),
        views.yearly.len()
    );

    let report = DashboardReport::new(&selection, views);

    // Step 4: Write JSON report
    info!("Step 4/5: Writing report...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    // Step 5: Render dashboard (if requested)
    if let Some(svg_path) = &args.output_svg {
        info!("Step 5/5: Rendering dashboard...");
        let svg = generate_dashboard(&report, args.chart_config.as_ref())
            .context("Failed to render dashboard")?;
        write_svg(&svg, svg_path).context("Failed to write dashboard SVG")?;
        info!("✓ Dashboard written to: {}", svg_path.display());
    } else {
        info!("Step 5/5: Skipping dashboard rendering (not requested)");
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("TRADE FLOW SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", generate_text_summary(&report, args.summary_rows));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Merge explicit arguments over the default selection
///
/// **Public** - shared by the report and categories commands
///
/// # Arguments
/// * `reporter` - Requested reporting country, if any
/// * `year_from` - Requested first year, if any
/// * `year_to` - Requested last year, if any
/// * `table` - Loaded table supplying the defaults
///
/// # Returns
/// The selection with every unspecified part taken from
/// `FilterSelection::defaults`
///
/// # Errors
/// * The table is empty, so no default selection exists
pub fn resolve_selection(
    reporter: Option<&str>,
    year_from: Option<i32>,
    year_to: Option<i32>,
    table: &TradeTable,
) -> Result<FilterSelection> {
    let defaults = FilterSelection::defaults(table)
        .context("Trade table is empty; no default selection available")?;

    let reporter = reporter.map(str::to_string).unwrap_or(defaults.reporter);
    let years = YearRange::new(
        year_from.unwrap_or(defaults.years.from),
        year_to.unwrap_or(defaults.years.to),
    );

    Ok(FilterSelection::new(reporter, years))
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
///
/// # Arguments
/// * `args` - Arguments as built from the command line
///
/// # Errors
/// * Empty data or output path, blank reporter, zero summary rows, or a
///   dashboard narrower than `MIN_WIDTH`
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("Data path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if let Some(reporter) = &args.reporter {
        if reporter.trim().is_empty() {
            anyhow::bail!("Reporter cannot be empty");
        }
    }

    if args.summary_rows == 0 {
        anyhow::bail!("summary_rows must be greater than 0");
    }

    if let Some(config) = &args.chart_config {
        if config.width < crate::chart::MIN_WIDTH {
            anyhow::bail!(
                "Dashboard width must be at least {}px",
                crate::chart::MIN_WIDTH
            );
        }
    }

    Ok(())
}
