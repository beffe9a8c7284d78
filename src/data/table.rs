//! Immutable in-memory trade table.
//!
//! The table is built once and never mutated afterwards. Selector domains
//! (distinct reporters and years) are computed at construction so the
//! controller layer can populate its filter controls without rescanning.

use super::record::TradeRecord;
use log::debug;
use std::collections::BTreeSet;

/// Loaded trade records plus their selector domains
#[derive(Debug, Clone, Default)]
pub struct TradeTable {
    records: Vec<TradeRecord>,
    reporters: Vec<String>,
    years: Vec<i32>,
}

impl TradeTable {
    /// Build the table and its selector domains
    ///
    /// **Public** - one-time initialization; the table is read-only afterwards
    pub fn from_records(records: Vec<TradeRecord>) -> Self {
        let reporters: BTreeSet<&str> = records.iter().map(|r| r.reporter.as_str()).collect();
        let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();

        let reporters: Vec<String> = reporters.into_iter().map(str::to_string).collect();
        let years: Vec<i32> = years.into_iter().collect();

        debug!(
            "Trade table built: {} records, {} reporters, {} years",
            records.len(),
            reporters.len(),
            years.len()
        );

        Self {
            records,
            reporters,
            years,
        }
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Distinct reporters, sorted
    pub fn reporters(&self) -> &[String] {
        &self.reporters
    }

    /// Distinct years, ascending
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn contains_reporter(&self, reporter: &str) -> bool {
        self.reporters
            .binary_search_by(|r| r.as_str().cmp(reporter))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
