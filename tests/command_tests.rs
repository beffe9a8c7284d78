use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;
use trade_flow_studio::chart::ChartConfig;
use trade_flow_studio::commands::{
    execute_categories, execute_report, validate_args, validate_report_file, CategoryArgs,
    ReportArgs,
};
use trade_flow_studio::data::Flow;
use trade_flow_studio::output::read_report;

const TABLE: &str = "REPORTER,PARTNER,YEAR,HS2,HS2_NAME,IMPORTS_MN,EXPORTS_MN\n\
Austria,Germany,2016,1,Live animals,4,4\n\
Austria,Germany,2018,1,Live animals,10,5\n\
Austria,Germany,2019,1,Live animals,20,0\n\
Austria,France,2018,2,Meat,3,7\n\
Austria,France,2018,3,Fish,-3,7\n\
Belgium,France,2019,2,Meat,1,1\n";

fn write_table(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("trade.csv");
    fs::write(&path, TABLE).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    assert!(validate_args(&ReportArgs::default()).is_ok());
}

#[test]
fn test_validate_args_empty_data_path() {
    let args = ReportArgs {
        data_path: "".into(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_summary_rows_zero() {
    let args = ReportArgs {
        summary_rows: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_report_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/report.json");
    let svg = dir.path().join("out/dashboard.svg");

    let args = ReportArgs {
        data_path: write_table(dir.path()),
        output_json: output.clone(),
        output_svg: Some(svg.clone()),
        chart_config: Some(ChartConfig::new().with_title("Intra-EU Trade")),
        ..Default::default()
    };

    let report = execute_report(args).unwrap();

    // Default selection: Austria over the last three years (2017-2019)
    assert_eq!(report.reporter, "Austria");
    assert_eq!((report.year_from, report.year_to), (2017, 2019));
    assert_eq!(report.partners.len(), 2);
    assert_eq!(report.partners[0].partner, "France");
    assert_eq!(report.partners[1].imports_mn, dec!(30));
    // Yearly view spans every year, including 2016
    assert_eq!(report.yearly.len(), 3);

    assert_eq!(read_report(&output).unwrap(), report);
    assert!(fs::read_to_string(&svg).unwrap().contains("Trade by Partner (Austria, 2017-2019)"));
    assert!(validate_report_file(&output).is_ok());
}

#[test]
fn test_execute_report_unknown_reporter_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        data_path: write_table(dir.path()),
        reporter: Some("Nowhereland".to_string()),
        output_json: dir.path().join("report.json"),
        ..Default::default()
    };

    let report = execute_report(args).unwrap();

    assert!(report.partners.is_empty());
    assert!(report.import_categories.is_empty());
    assert!(report.export_categories.is_empty());
    assert!(report.yearly.is_empty());
}

#[test]
fn test_execute_report_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        data_path: dir.path().join("absent.csv"),
        output_json: dir.path().join("report.json"),
        ..Default::default()
    };

    assert!(execute_report(args).is_err());
}

#[test]
fn test_execute_categories_for_parsed_flow() {
    let dir = tempfile::tempdir().unwrap();
    let args = CategoryArgs {
        data_path: write_table(dir.path()),
        flow: "Exports".parse().unwrap(),
        year_from: Some(2018),
        ..Default::default()
    };

    let slices = execute_categories(args).unwrap();

    // Austria 2018-2019 exports: Meat 7, Live animals 5 + 0
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].name, "Meat");
    assert_eq!(slices[0].value, dec!(7));
    assert_eq!(slices[1].value, dec!(5));
}

#[test]
fn test_unknown_flow_name_is_rejected() {
    let err = "re-exports".parse::<Flow>().unwrap_err();
    assert!(err.to_string().contains("re-exports"));
}

#[test]
fn test_execute_categories_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    let args = CategoryArgs {
        data_path: dir.path().join("absent.csv"),
        ..Default::default()
    };

    assert!(execute_categories(args).is_err());
}
