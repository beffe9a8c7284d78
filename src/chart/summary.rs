//! Plain-text rendering of a report for the terminal.

use super::generator::format_volume;
use crate::aggregator::CategorySlice;
use crate::output::DashboardReport;
use rust_decimal::Decimal;

const RULE_WIDTH: usize = 72;

/// Create a text summary with one table per view
///
/// `max_rows` caps the partner and yearly tables; category tables are
/// already bounded by the collapse into `OTHER`.
pub fn generate_text_summary(report: &DashboardReport, max_rows: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", report.caption));
    lines.push(format!(
        "  Total imports: {} mn | Total exports: {} mn",
        format_volume(report.total_imports()),
        format_volume(report.total_exports())
    ));
    lines.push(String::new());

    lines.push(format!(
        "  TRADE BY PARTNER ({}-{})",
        report.year_from, report.year_to
    ));
    lines.push(rule('┏', '┳', '┓'));
    lines.push(format!("  ┃ {:<36} ┃ {:>13} ┃ {:>13} ┃", "Partner", "Imports (mn)", "Exports (mn)"));
    lines.push(rule('┣', '╋', '┫'));
    for partner in report.partners.iter().take(max_rows) {
        lines.push(format!(
            "  ┃ {:<36} ┃ {:>13} ┃ {:>13} ┃",
            fit(&partner.partner, 36),
            format_volume(partner.imports_mn),
            format_volume(partner.exports_mn)
        ));
    }
    lines.push(rule('┗', '┻', '┛'));
    if report.partners.len() > max_rows {
        lines.push(format!(
            "   (Showing {} of {} partners)",
            max_rows,
            report.partners.len()
        ));
    }

    push_category_table(&mut lines, "IMPORTS BY PRODUCT CATEGORY (HS2)", &report.import_categories);
    push_category_table(&mut lines, "EXPORTS BY PRODUCT CATEGORY (HS2)", &report.export_categories);

    lines.push(String::new());
    lines.push("  TRADE FLOWS BY YEAR".to_string());
    lines.push(rule('┏', '┳', '┓'));
    lines.push(format!("  ┃ {:<36} ┃ {:>13} ┃ {:>13} ┃", "Year", "Imports (mn)", "Exports (mn)"));
    lines.push(rule('┣', '╋', '┫'));
    for year in report.yearly.iter().take(max_rows) {
        lines.push(format!(
            "  ┃ {:<36} ┃ {:>13} ┃ {:>13} ┃",
            year.year,
            format_volume(year.imports_mn),
            format_volume(year.exports_mn)
        ));
    }
    lines.push(rule('┗', '┻', '┛'));
    if report.yearly.len() > max_rows {
        lines.push(format!(
            "   (Showing {} of {} years)",
            max_rows,
            report.yearly.len()
        ));
    }

    lines.join("\n")
}

/// Render one category view as a standalone table
///
/// **Public** - used by the categories command
pub fn generate_category_table(heading: &str, slices: &[CategorySlice]) -> String {
    let mut lines = Vec::new();
    push_category_table(&mut lines, heading, slices);
    lines.join("\n")
}

fn push_category_table(lines: &mut Vec<String>, heading: &str, slices: &[CategorySlice]) {
    let total: Decimal = slices.iter().map(|s| s.value).sum();

    lines.push(String::new());
    lines.push(format!("  {}", heading));
    lines.push(rule('┏', '┳', '┓'));
    lines.push(format!("  ┃ {:<36} ┃ {:>13} ┃ {:>13} ┃", "Category", "Value (mn)", "Share"));
    lines.push(rule('┣', '╋', '┫'));
    for slice in slices {
        let share = if total > Decimal::ZERO {
            (slice.value / total * Decimal::ONE_HUNDRED).round_dp(1)
        } else {
            Decimal::ZERO
        };
        lines.push(format!(
            "  ┃ {:<36} ┃ {:>13} ┃ {:>12.1}% ┃",
            fit(&slice.name, 36),
            format_volume(slice.value),
            share
        ));
    }
    lines.push(rule('┗', '┻', '┛'));
}

fn rule(left: char, joint: char, right: char) -> String {
    let cell = |w: usize| "━".repeat(w);
    format!(
        "  {}{}{}{}{}{}{}",
        left,
        cell(38),
        joint,
        cell(15),
        joint,
        cell(15),
        right
    )
}

/// Cut text to `width` characters for a table cell
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width - 1).collect();
        format!("{}…", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{DashboardViews, FilterSelection, PartnerFlow, YearRange, YearlyFlow};
    use rust_decimal_macros::dec;

    fn report() -> DashboardReport {
        let views = DashboardViews {
            partners: vec![
                PartnerFlow::new("Germany", dec!(30), dec!(5)),
                PartnerFlow::new("France", dec!(3), dec!(7)),
            ],
            import_categories: vec![
                CategorySlice::new(1, "Live animals", dec!(30)),
                CategorySlice::new(2, "Meat", dec!(10)),
            ],
            export_categories: Vec::new(),
            yearly: vec![YearlyFlow::new(2018, dec!(13), dec!(12))],
        };
        DashboardReport::new(&FilterSelection::new("Austria", YearRange::new(2017, 2019)), views)
    }

    #[test]
    fn test_summary_contains_views() {
        let text = generate_text_summary(&report(), 10);

        assert!(text.contains("Reporting Country: Austria, Years: 2017-2019"));
        assert!(text.contains("Total imports: 33 mn | Total exports: 12 mn"));
        assert!(text.contains("Germany"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("2018"));
    }

    #[test]
    fn test_summary_caps_partner_rows() {
        let text = generate_text_summary(&report(), 1);
        assert!(text.contains("Germany"));
        assert!(!text.contains("France"));
        assert!(text.contains("(Showing 1 of 2 partners)"));
    }

    #[test]
    fn test_summary_caps_year_rows() {
        let mut report = report();
        report.yearly = (2015..=2020)
            .map(|year| YearlyFlow::new(year, dec!(1.5), dec!(2)))
            .collect();

        let text = generate_text_summary(&report, 4);

        assert!(text.contains("┃ 2018 "));
        assert!(!text.contains("┃ 2019 "));
        assert!(text.contains("(Showing 4 of 6 years)"));
        assert!(!generate_text_summary(&report, 6).contains("years)"));
    }

    #[test]
    fn test_category_table_standalone() {
        let slices = vec![
            CategorySlice::new(2, "Meat", dec!(0.1)),
            CategorySlice::new(1, "Live animals", dec!(0.3)),
        ];
        let text = generate_category_table("EXPORTS BY PRODUCT CATEGORY (HS2)", &slices);

        assert!(text.contains("EXPORTS BY PRODUCT CATEGORY (HS2)"));
        assert!(text.contains("25.0%"));
        assert!(text.contains("75.0%"));
        assert!(!text.contains("TRADE BY PARTNER"));
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Austria", 10), "Austria");
        assert_eq!(fit("Netherlands", 5), "Neth…");
    }
}
