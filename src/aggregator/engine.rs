//! Aggregation engine over an immutable trade table.
//!
//! Every query recomputes from the base table; nothing is cached. Unknown
//! reporters and empty or inverted year ranges produce empty results.

use super::category::{compose_categories, CategorySlice};
use super::filter::{filter_rows, reporter_rows, FilterSelection, YearRange};
use super::partner::{aggregate_by_partner, PartnerFlow};
use super::yearly::{aggregate_by_year, YearlyFlow};
use crate::data::{Flow, TradeTable};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query surface consumed by the controller layer
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    table: Arc<TradeTable>,
}

/// The four chart views for one selection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardViews {
    pub partners: Vec<PartnerFlow>,
    pub import_categories: Vec<CategorySlice>,
    pub export_categories: Vec<CategorySlice>,
    pub yearly: Vec<YearlyFlow>,
}

impl DashboardViews {
    /// True when no view has any row
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
            && self.import_categories.is_empty()
            && self.export_categories.is_empty()
            && self.yearly.is_empty()
    }
}

impl AggregationEngine {
    pub fn new(table: Arc<TradeTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TradeTable {
        &self.table
    }

    /// Reporter selector domain
    pub fn reporters(&self) -> &[String] {
        self.table.reporters()
    }

    /// Year selector domain
    pub fn years(&self) -> &[i32] {
        self.table.years()
    }

    /// Imports and exports per partner, alphabetical by partner
    pub fn by_partner(&self, reporter: &str, years: YearRange) -> Vec<PartnerFlow> {
        aggregate_by_partner(filter_rows(self.table.records(), reporter, years))
    }

    /// Top categories of one flow plus the collapsed `OTHER` slice
    pub fn by_category(&self, reporter: &str, years: YearRange, flow: Flow) -> Vec<CategorySlice> {
        compose_categories(filter_rows(self.table.records(), reporter, years), flow)
    }

    /// Imports and exports per year over every year of the reporter
    pub fn by_year(&self, reporter: &str) -> Vec<YearlyFlow> {
        aggregate_by_year(reporter_rows(self.table.records(), reporter))
    }

    /// Run all four queries for a selection
    ///
    /// **Public** - what the controller calls after every selection change
    pub fn views(&self, selection: &FilterSelection) -> DashboardViews {
        let reporter = selection.reporter.as_str();
        let years = selection.years;

        debug!("Computing views for {}", selection.caption());

        DashboardViews {
            partners: self.by_partner(reporter, years),
            import_categories: self.by_category(reporter, years, Flow::Imports),
            export_categories: self.by_category(reporter, years, Flow::Exports),
            yearly: self.by_year(reporter),
        }
    }
}
