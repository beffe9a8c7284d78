use rust_decimal_macros::dec;
use std::path::Path;
use tempfile::NamedTempFile;
use trade_flow_studio::aggregator::{
    CategorySlice, DashboardViews, FilterSelection, PartnerFlow, YearRange, YearlyFlow,
};
use trade_flow_studio::output::{read_report, validate_path, write_report, write_svg, DashboardReport};
use trade_flow_studio::utils::config::SCHEMA_VERSION;

fn create_test_report() -> DashboardReport {
    let views = DashboardViews {
        partners: vec![
            PartnerFlow::new("France", dec!(3), dec!(7)),
            PartnerFlow::new("Germany", dec!(30), dec!(5)),
        ],
        import_categories: vec![
            CategorySlice::new(1, "Live animals", dec!(30)),
            CategorySlice::new(2, "Meat", dec!(3)),
        ],
        export_categories: vec![
            CategorySlice::new(2, "Meat", dec!(7)),
            CategorySlice::new(1, "Live animals", dec!(5)),
        ],
        yearly: vec![YearlyFlow::new(2018, dec!(13), dec!(12)), YearlyFlow::new(2019, dec!(20), dec!(0))],
    };
    DashboardReport::new(&FilterSelection::new("Austria", YearRange::new(2018, 2019)), views)
}

#[test]
fn test_report_metadata() {
    let report = create_test_report();

    assert_eq!(report.version, SCHEMA_VERSION);
    assert_eq!(report.caption, "Reporting Country: Austria, Years: 2018-2019");
    assert_eq!(report.total_imports(), dec!(33));
    assert_eq!(report.total_exports(), dec!(12));
    assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Write
    write_report(&report, path).unwrap();

    // Read back
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.partners, report.partners);
    assert_eq!(loaded.export_categories, report.export_categories);
}

#[test]
fn test_report_json_field_names() {
    let json = serde_json::to_value(create_test_report()).unwrap();

    assert_eq!(json["reporter"], "Austria");
    assert_eq!(json["year_from"], 2018);
    assert_eq!(json["partners"][1]["partner"], "Germany");
    assert_eq!(json["import_categories"][0]["code"], 1);
    // Volumes are written as decimal strings so they read back exactly
    assert_eq!(json["yearly"][0]["exports_mn"], "12");
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_svg_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/dashboard.svg");
    let valid_svg = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <rect x="0" y="0" width="100" height="100" fill="red"/>
</svg>"#;

    write_svg(valid_svg, &nested_path).unwrap();

    assert!(nested_path.exists());
}
