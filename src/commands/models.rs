use crate::chart::ChartConfig;
use crate::data::Flow;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the source trade table
    pub data_path: PathBuf,

    /// Field delimiter of the source table
    pub delimiter: u8,

    /// Reporting country (None = default selection)
    pub reporter: Option<String>,

    /// First year of the range (None = default window)
    pub year_from: Option<i32>,

    /// Last year of the range (None = default window)
    pub year_to: Option<i32>,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Output path for SVG dashboard (optional)
    pub output_svg: Option<PathBuf>,

    /// Dashboard configuration
    pub chart_config: Option<ChartConfig>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Row cap for the partner and yearly summary tables
    pub summary_rows: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/world_trade_extract.csv"),
            delimiter: b',',
            reporter: None,
            year_from: None,
            year_to: None,
            output_json: PathBuf::from("report.json"),
            output_svg: None,
            chart_config: None,
            print_summary: false,
            summary_rows: 30,
        }
    }
}

/// Arguments for the categories command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CategoryArgs {
    /// Path to the source trade table
    pub data_path: PathBuf,

    /// Field delimiter of the source table
    pub delimiter: u8,

    /// Reporting country (None = default selection)
    pub reporter: Option<String>,

    /// First year of the range (None = default window)
    pub year_from: Option<i32>,

    /// Last year of the range (None = default window)
    pub year_to: Option<i32>,

    /// Flow whose composition is listed
    pub flow: Flow,
}

impl Default for CategoryArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/world_trade_extract.csv"),
            delimiter: b',',
            reporter: None,
            year_from: None,
            year_to: None,
            flow: Flow::Imports,
        }
    }
}
