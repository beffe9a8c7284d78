use crate::data::load_table;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  {}", report.caption);
    println!("  Partners: {}", report.partners.len());
    println!("  Import categories: {}", report.import_categories.len());
    println!("  Export categories: {}", report.export_categories.len());
    println!("  Years: {}", report.yearly.len());
    println!("  Generated at: {}", report.generated_at);

    Ok(())
}

/// Print the reporter and year selector domains of a table
pub fn display_domains(data_path: &Path, delimiter: u8) -> Result<()> {
    let loaded = load_table(data_path, delimiter)
        .with_context(|| format!("Failed to load trade table {}", data_path.display()))?;
    let table = &loaded.table;

    println!("Records: {} ({} rejected)", table.len(), loaded.rejected.len());
    println!("Reporters ({}):", table.reporters().len());
    for reporter in table.reporters() {
        println!("  {}", reporter);
    }

    let years: Vec<String> = table.years().iter().map(|y| y.to_string()).collect();
    println!("Years ({}): {}", years.len(), years.join(", "));

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Trade Flow Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string             - Schema version (e.g., '1.0.0')");
        println!("  reporter: string            - Selected reporting country");
        println!("  year_from: number           - First year of the range (inclusive)");
        println!("  year_to: number             - Last year of the range (inclusive)");
        println!("  caption: string             - Applied-filter description");
        println!("  partners: array             - Trade by partner, alphabetical");
        println!("    partner: string           - Partner country");
        println!("    imports_mn: decimal string - Summed imports (mn)");
        println!("    exports_mn: decimal string - Summed exports (mn)");
        println!("  import_categories: array    - Top 10 HS2 categories plus OTHER");
        println!("  export_categories: array    - Top 10 HS2 categories plus OTHER");
        println!("    code: number              - HS2 code (999 = OTHER)");
        println!("    name: string              - Display name (max 32 chars + '...')");
        println!("    value: decimal string     - Summed flow (mn)");
        println!("  yearly: array               - Trade by year, ascending");
        println!("    year: number              - Calendar year");
        println!("    imports_mn: decimal string - Summed imports (mn)");
        println!("    exports_mn: decimal string - Summed exports (mn)");
        println!("  generated_at: string        - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Trade Flow Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Partner, product-category and yearly views of bilateral trade flows.");
}
