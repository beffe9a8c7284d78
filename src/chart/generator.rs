//! SVG dashboard generation.
//!
//! Renders the four views of a report into one static SVG document:
//! - Grouped bar chart of trade by partner (top, full width)
//! - Import and export composition pies with a centre hole
//! - Two-series line chart of trade by year
//!
//! Empty views draw a "No data" placeholder instead of failing.

use crate::aggregator::{CategorySlice, PartnerFlow, YearlyFlow};
use crate::output::DashboardReport;
use crate::utils::error::ChartError;
use log::{debug, info};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::f64::consts::PI;

/// Narrowest dashboard that still leaves room for the lower panels
pub const MIN_WIDTH: usize = 600;

const HEADER_HEIGHT: usize = 80;
const BAR_PANEL_HEIGHT: usize = 380;
const LOWER_PANEL_HEIGHT: usize = 440;

// Share of the width taken by each pie panel; the line chart gets the rest
const PIE_PANEL_SHARE: f64 = 0.3;

// Pie hole radius relative to the outer radius
const PIE_HOLE: f64 = 0.2;

const IMPORTS_COLOR: &str = "rgb(31, 119, 180)";
const EXPORTS_COLOR: &str = "rgb(255, 127, 14)";
const OTHER_COLOR: &str = "rgb(190, 190, 190)";
const AXIS_COLOR: &str = "rgb(120, 120, 120)";

const SLICE_COLORS: [&str; 10] = [
    "rgb(31, 119, 180)",
    "rgb(255, 127, 14)",
    "rgb(44, 160, 44)",
    "rgb(214, 39, 40)",
    "rgb(148, 103, 189)",
    "rgb(140, 86, 75)",
    "rgb(227, 119, 194)",
    "rgb(188, 189, 34)",
    "rgb(23, 190, 207)",
    "rgb(127, 127, 127)",
];

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Intra-EU Trade".to_string(),
            width: 1200,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Area of the document a chart draws into
#[derive(Debug, Clone, Copy)]
struct Panel {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Generate the SVG dashboard for a report
///
/// # Errors
/// * `ChartError::TooNarrow` - configured width below `MIN_WIDTH`
pub fn generate_dashboard(
    report: &DashboardReport,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    let config = config.cloned().unwrap_or_default();
    if config.width < MIN_WIDTH {
        return Err(ChartError::TooNarrow(config.width, MIN_WIDTH));
    }

    info!("Generating dashboard for {}", report.caption);

    let width = config.width as f64;
    let total_height = HEADER_HEIGHT + BAR_PANEL_HEIGHT + LOWER_PANEL_HEIGHT;
    let mut svg_content = String::new();

    // Header
    svg_content.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, total_height, config.width, total_height
    ));
    svg_content.push_str(
        r#"<style>text { font-family: helvetica, sans-serif; } .mark:hover { opacity: 0.8; }</style>"#,
    );
    svg_content.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, total_height
    ));

    // Title and applied filters
    svg_content.push_str(&format!(
        r#"<text x="{:.2}" y="32" font-size="24" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2.0,
        escape_xml(&config.title)
    ));
    svg_content.push_str(&format!(
        r#"<text x="{:.2}" y="62" font-size="16" text-anchor="middle">{}</text>"#,
        width / 2.0,
        escape_xml(&report.caption)
    ));

    let range = format!("{}, {}-{}", report.reporter, report.year_from, report.year_to);

    render_bar_chart(
        &mut svg_content,
        Panel {
            x: 0.0,
            y: HEADER_HEIGHT as f64,
            width,
            height: BAR_PANEL_HEIGHT as f64,
        },
        &format!("Trade by Partner ({})", range),
        &report.partners,
    );

    let lower_y = (HEADER_HEIGHT + BAR_PANEL_HEIGHT) as f64;
    let pie_width = width * PIE_PANEL_SHARE;

    render_pie_chart(
        &mut svg_content,
        Panel {
            x: 0.0,
            y: lower_y,
            width: pie_width,
            height: LOWER_PANEL_HEIGHT as f64,
        },
        &format!("Imports by Product Category (HS2) ({})", range),
        &report.import_categories,
    );
    render_pie_chart(
        &mut svg_content,
        Panel {
            x: pie_width,
            y: lower_y,
            width: pie_width,
            height: LOWER_PANEL_HEIGHT as f64,
        },
        &format!("Exports by Product Category (HS2) ({})", range),
        &report.export_categories,
    );
    render_line_chart(
        &mut svg_content,
        Panel {
            x: pie_width * 2.0,
            y: lower_y,
            width: width - pie_width * 2.0,
            height: LOWER_PANEL_HEIGHT as f64,
        },
        &format!("Trade Flows by Year ({})", report.reporter),
        &report.yearly,
    );

    svg_content.push_str("</svg>");

    info!("Dashboard generated successfully ({} bytes)", svg_content.len());
    Ok(svg_content)
}

fn render_bar_chart(out: &mut String, panel: Panel, title: &str, partners: &[PartnerFlow]) {
    open_panel(out, panel, title);

    if partners.is_empty() {
        render_no_data(out, panel);
        close_panel(out);
        return;
    }

    let (left, top, right, bottom) = (70.0, 50.0, 20.0, 90.0);
    let plot_w = panel.width - left - right;
    let plot_h = panel.height - top - bottom;

    let max = partners
        .iter()
        .map(|p| p.imports_mn.max(p.exports_mn))
        .max()
        .unwrap_or(Decimal::ZERO);
    let scale = if max > Decimal::ZERO { plot_h / to_plot(max) } else { 0.0 };

    render_value_axis(out, left, top, plot_w, plot_h, max);
    render_legend(out, panel.width - 240.0, 36.0);

    let group_w = plot_w / partners.len() as f64;
    let bar_w = group_w * 0.4;
    let baseline = top + plot_h;

    for (i, partner) in partners.iter().enumerate() {
        let group_x = left + i as f64 * group_w;
        let name = escape_xml(&partner.partner);

        for (offset, value, color, label) in [
            (0.1, partner.imports_mn, IMPORTS_COLOR, "Imports"),
            (0.5, partner.exports_mn, EXPORTS_COLOR, "Exports"),
        ] {
            let h = to_plot(value) * scale;
            out.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="mark"><title>{} {}: {}</title></rect>"#,
                group_x + group_w * offset,
                baseline - h,
                bar_w,
                h,
                color,
                name,
                label,
                format_volume(value)
            ));
        }

        let label_x = group_x + group_w / 2.0;
        let label_y = baseline + 14.0;
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end" transform="rotate(-45 {:.2} {:.2})">{}</text>"#,
            label_x, label_y, label_x, label_y, name
        ));
    }

    close_panel(out);
}

fn render_pie_chart(out: &mut String, panel: Panel, title: &str, slices: &[CategorySlice]) {
    open_panel(out, panel, title);

    let total: Decimal = slices.iter().map(|s| s.value).sum();
    if slices.is_empty() || total <= Decimal::ZERO {
        render_no_data(out, panel);
        close_panel(out);
        return;
    }

    let legend_h = slices.len() as f64 * 16.0;
    let radius = (panel.width / 2.0 - 20.0)
        .min((panel.height - 60.0 - legend_h - 30.0) / 2.0)
        .max(10.0);
    let cx = panel.width / 2.0;
    let cy = 50.0 + radius;

    let mut angle = -PI / 2.0;
    for (i, slice) in slices.iter().enumerate() {
        let fraction = to_plot(slice.value) / to_plot(total);
        if fraction <= 0.0 {
            continue;
        }

        let color = slice_color(i, slice);
        let name = escape_xml(&slice.name);
        let sweep = fraction * 2.0 * PI;

        if fraction >= 0.9999 {
            out.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" class="mark"><title>{}: {}</title></circle>"#,
                cx, cy, radius, color, name, format_volume(slice.value)
            ));
        } else {
            let (x1, y1) = polar(cx, cy, radius, angle);
            let (x2, y2) = polar(cx, cy, radius, angle + sweep);
            let large_arc = if sweep > PI { 1 } else { 0 };
            out.push_str(&format!(
                r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="white" class="mark"><title>{}: {}</title></path>"#,
                cx, cy, x1, y1, radius, radius, large_arc, x2, y2, color, name, format_volume(slice.value)
            ));
        }

        // Percentage label for slices wide enough to hold it
        if fraction >= 0.04 {
            let (lx, ly) = polar(cx, cy, radius * 0.65, angle + sweep / 2.0);
            out.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="middle" fill="white" pointer-events="none">{:.1}%</text>"#,
                lx,
                ly + 4.0,
                fraction * 100.0
            ));
        }

        angle += sweep;
    }

    out.push_str(&format!(
        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="white"/>"#,
        cx,
        cy,
        radius * PIE_HOLE
    ));

    let legend_y = cy + radius + 24.0;
    for (i, slice) in slices.iter().enumerate() {
        let y = legend_y + i as f64 * 16.0;
        out.push_str(&format!(
            r#"<rect x="10" y="{:.2}" width="10" height="10" fill="{}" rx="2"/>"#,
            y - 9.0,
            slice_color(i, slice)
        ));
        out.push_str(&format!(
            r#"<text x="26" y="{:.2}" font-size="11">{}</text>"#,
            y,
            escape_xml(&slice.name)
        ));
    }

    close_panel(out);
}

fn render_line_chart(out: &mut String, panel: Panel, title: &str, yearly: &[YearlyFlow]) {
    open_panel(out, panel, title);

    if yearly.is_empty() {
        render_no_data(out, panel);
        close_panel(out);
        return;
    }

    let (left, top, right, bottom) = (70.0, 60.0, 20.0, 60.0);
    let plot_w = panel.width - left - right;
    let plot_h = panel.height - top - bottom;

    let max = yearly
        .iter()
        .map(|y| y.imports_mn.max(y.exports_mn))
        .max()
        .unwrap_or(Decimal::ZERO);
    let scale = if max > Decimal::ZERO { plot_h / to_plot(max) } else { 0.0 };

    let first_year = yearly[0].year;
    let last_year = yearly[yearly.len() - 1].year;
    let span = (last_year - first_year) as f64;
    let x_of = |year: i32| {
        if span > 0.0 {
            left + (year - first_year) as f64 / span * plot_w
        } else {
            left + plot_w / 2.0
        }
    };
    let baseline = top + plot_h;

    render_value_axis(out, left, top, plot_w, plot_h, max);
    render_legend(out, left, 40.0);

    for point in yearly {
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
            x_of(point.year),
            baseline + 18.0,
            point.year
        ));
    }

    let series: [(&str, &str, fn(&YearlyFlow) -> Decimal); 2] = [
        (IMPORTS_COLOR, "Imports", |y| y.imports_mn),
        (EXPORTS_COLOR, "Exports", |y| y.exports_mn),
    ];

    for (color, label, value_of) in series {
        let points: Vec<String> = yearly
            .iter()
            .map(|y| format!("{:.2},{:.2}", x_of(y.year), baseline - to_plot(value_of(y)) * scale))
            .collect();
        out.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            points.join(" "),
            color
        ));

        for y in yearly {
            out.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{}" class="mark"><title>{} {}: {}</title></circle>"#,
                x_of(y.year),
                baseline - to_plot(value_of(y)) * scale,
                color,
                label,
                y.year,
                format_volume(value_of(y))
            ));
        }
    }

    close_panel(out);
}

fn open_panel(out: &mut String, panel: Panel, title: &str) {
    debug!("Rendering panel '{}' at ({:.0}, {:.0})", title, panel.x, panel.y);

    out.push_str(&format!(
        r#"<g transform="translate({:.2} {:.2})">"#,
        panel.x, panel.y
    ));
    out.push_str(&format!(
        r#"<rect x="4" y="4" width="{:.2}" height="{:.2}" fill="none" stroke="lightgrey"/>"#,
        (panel.width - 8.0).max(0.0),
        (panel.height - 8.0).max(0.0)
    ));
    out.push_str(&format!(
        r#"<text x="{:.2}" y="26" font-size="13" text-anchor="middle" font-weight="bold">{}</text>"#,
        panel.width / 2.0,
        escape_xml(title)
    ));
}

fn close_panel(out: &mut String) {
    out.push_str("</g>");
}

fn render_no_data(out: &mut String, panel: Panel) {
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle" fill="{}">No data</text>"#,
        panel.width / 2.0,
        panel.height / 2.0,
        AXIS_COLOR
    ));
}

/// Y axis with five ticks, plus the baseline
fn render_value_axis(out: &mut String, left: f64, top: f64, plot_w: f64, plot_h: f64, max: Decimal) {
    let baseline = top + plot_h;

    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
        left, top, left, baseline, AXIS_COLOR
    ));
    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
        left,
        baseline,
        left + plot_w,
        baseline,
        AXIS_COLOR
    ));

    for i in 0..=4 {
        let value = max * Decimal::from(i) / Decimal::from(4);
        let y = baseline - plot_h * i as f64 / 4.0;
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="10" text-anchor="end">{}</text>"#,
            left - 6.0,
            y + 3.0,
            format_volume(value)
        ));
    }

    let mid = top + plot_h / 2.0;
    out.push_str(&format!(
        r#"<text x="16" y="{:.2}" font-size="11" text-anchor="middle" transform="rotate(-90 16 {:.2})">Trade Volume (mn)</text>"#,
        mid, mid
    ));
}

fn render_legend(out: &mut String, x: f64, y: f64) {
    for (i, (label, color)) in [("Imports (mn)", IMPORTS_COLOR), ("Exports (mn)", EXPORTS_COLOR)]
        .iter()
        .enumerate()
    {
        let item_x = x + i as f64 * 110.0;
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="12" height="12" fill="{}" rx="2"/>"#,
            item_x,
            y - 10.0,
            color
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11">{}</text>"#,
            item_x + 16.0,
            y,
            label
        ));
    }
}

fn slice_color(index: usize, slice: &CategorySlice) -> &'static str {
    if slice.is_other() {
        OTHER_COLOR
    } else {
        SLICE_COLORS[index % SLICE_COLORS.len()]
    }
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Volume label: whole numbers without decimals, otherwise one decimal
pub fn format_volume(value: Decimal) -> String {
    if value.fract().is_zero() {
        value.normalize().to_string()
    } else {
        format!("{:.1}", value.round_dp(1))
    }
}

/// Drawing coordinate for a volume; only geometry leaves exact decimals
fn to_plot(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Escape text for use in SVG content and attributes
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
