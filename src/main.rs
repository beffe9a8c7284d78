//! Trade Flow Studio CLI
//!
//! Loads a trade-flow table and renders partner, product-category and
//! yearly views for a reporting country and year range.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use trade_flow_studio::chart::ChartConfig;
use trade_flow_studio::commands::{
    display_domains, display_schema, display_version, execute_categories, execute_report,
    validate_args, validate_report_file, CategoryArgs, ReportArgs,
};
use trade_flow_studio::data::Flow;
use trade_flow_studio::utils::config::DATA_PATH_ENV;

/// Trade Flow Studio - dashboard views of bilateral trade flows
#[derive(Parser, Debug)]
#[command(name = "trade-flow")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a selection and write the report
    Report {
        /// Source trade table (CSV)
        #[arg(short, long, env = DATA_PATH_ENV)]
        data: PathBuf,

        /// Field delimiter of the source table
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Reporting country (defaults to Austria or the first reporter)
        #[arg(short, long)]
        reporter: Option<String>,

        /// First year of the range (defaults to the last three years)
        #[arg(long)]
        from: Option<i32>,

        /// Last year of the range
        #[arg(long)]
        to: Option<i32>,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Output path for SVG dashboard (optional)
        #[arg(short, long)]
        svg: Option<PathBuf>,

        /// Dashboard title
        #[arg(long)]
        title: Option<String>,

        /// Dashboard width in pixels
        #[arg(long, default_value = "1200")]
        width: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Row cap for the partner and yearly summary tables
        #[arg(long, default_value = "30")]
        summary_rows: usize,
    },

    /// List the category composition of one flow
    Categories {
        /// Source trade table (CSV)
        #[arg(short, long, env = DATA_PATH_ENV)]
        data: PathBuf,

        /// Field delimiter of the source table
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Flow to compose (imports or exports)
        #[arg(short, long, default_value = "imports")]
        flow: Flow,

        /// Reporting country (defaults to Austria or the first reporter)
        #[arg(short, long)]
        reporter: Option<String>,

        /// First year of the range (defaults to the last three years)
        #[arg(long)]
        from: Option<i32>,

        /// Last year of the range
        #[arg(long)]
        to: Option<i32>,
    },

    /// List the reporter and year selector domains of a table
    Domains {
        /// Source trade table (CSV)
        #[arg(short, long, env = DATA_PATH_ENV)]
        data: PathBuf,

        /// Field delimiter of the source table
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            data,
            delimiter,
            reporter,
            from,
            to,
            output,
            svg,
            title,
            width,
            summary,
            summary_rows,
        } => {
            let chart_config = if svg.is_some() {
                let mut config = ChartConfig::new().with_width(width);

                if let Some(title_str) = title {
                    config = config.with_title(title_str);
                }

                Some(config)
            } else {
                None
            };

            let args = ReportArgs {
                data_path: data,
                delimiter: delimiter_byte(delimiter)?,
                reporter,
                year_from: from,
                year_to: to,
                output_json: output,
                output_svg: svg,
                chart_config,
                print_summary: summary,
                summary_rows,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Categories {
            data,
            delimiter,
            flow,
            reporter,
            from,
            to,
        } => {
            let args = CategoryArgs {
                data_path: data,
                delimiter: delimiter_byte(delimiter)?,
                reporter,
                year_from: from,
                year_to: to,
                flow,
            };

            execute_categories(args)?;
        }

        Commands::Domains { data, delimiter } => {
            display_domains(&data, delimiter_byte(delimiter)?)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Delimiters must be single-byte ASCII characters
fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("Delimiter '{}' is not an ASCII character", delimiter))
}
