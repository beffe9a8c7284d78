//! Output JSON schema definitions for dashboard reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{CategorySlice, DashboardViews, FilterSelection, PartnerFlow, YearlyFlow};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Selected reporting country
    pub reporter: String,

    /// First year of the selected range (inclusive)
    pub year_from: i32,

    /// Last year of the selected range (inclusive)
    pub year_to: i32,

    /// Applied-filter description
    pub caption: String,

    /// Trade by partner
    pub partners: Vec<PartnerFlow>,

    /// Import composition by HS2 category
    pub import_categories: Vec<CategorySlice>,

    /// Export composition by HS2 category
    pub export_categories: Vec<CategorySlice>,

    /// Trade by year over the reporter's full year domain
    pub yearly: Vec<YearlyFlow>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

impl DashboardReport {
    /// Assemble a report for one selection and its computed views
    pub fn new(selection: &FilterSelection, views: DashboardViews) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            reporter: selection.reporter.clone(),
            year_from: selection.years.from,
            year_to: selection.years.to,
            caption: selection.caption(),
            partners: views.partners,
            import_categories: views.import_categories,
            export_categories: views.export_categories,
            yearly: views.yearly,
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Total imports across partners
    pub fn total_imports(&self) -> Decimal {
        self.partners.iter().map(|p| p.imports_mn).sum()
    }

    /// Total exports across partners
    pub fn total_exports(&self) -> Decimal {
        self.partners.iter().map(|p| p.exports_mn).sum()
    }
}
