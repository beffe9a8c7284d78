//! Row filter and filter selection.
//!
//! Partner and category queries share one filter: exact reporter match and an
//! inclusive year range. An inverted range (`from > to`) matches nothing.

use crate::data::{TradeRecord, TradeTable};
use crate::utils::config::{DEFAULT_REPORTER, DEFAULT_YEAR_WINDOW};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive year range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    pub fn single(year: i32) -> Self {
        Self::new(year, year)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }

    /// True when `from > to`; such a range selects no rows
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Rows of `reporter` whose year lies in `years`
///
/// **Public** - shared first step of the partner and category queries
pub fn filter_rows<'a>(
    records: &'a [TradeRecord],
    reporter: &'a str,
    years: YearRange,
) -> impl Iterator<Item = &'a TradeRecord> + 'a {
    records
        .iter()
        .filter(move |r| r.reporter == reporter && years.contains(r.year))
}

/// Rows of `reporter` across every year
///
/// **Public** - first step of the time-series query
pub fn reporter_rows<'a>(
    records: &'a [TradeRecord],
    reporter: &'a str,
) -> impl Iterator<Item = &'a TradeRecord> + 'a {
    records.iter().filter(move |r| r.reporter == reporter)
}

/// Current reporter and year range, owned by the controller layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub reporter: String,
    pub years: YearRange,
}

impl FilterSelection {
    pub fn new(reporter: impl Into<String>, years: YearRange) -> Self {
        Self {
            reporter: reporter.into(),
            years,
        }
    }

    /// Initial selection for a freshly loaded table
    ///
    /// **Public** - `DEFAULT_REPORTER` when present (else the first reporter),
    /// and the last `DEFAULT_YEAR_WINDOW` years of the year domain.
    /// Returns `None` for an empty table.
    pub fn defaults(table: &TradeTable) -> Option<Self> {
        let reporter = if table.contains_reporter(DEFAULT_REPORTER) {
            DEFAULT_REPORTER.to_string()
        } else {
            table.reporters().first()?.clone()
        };

        let first = *table.years().first()?;
        let last = *table.years().last()?;
        let from = (last - (DEFAULT_YEAR_WINDOW - 1)).max(first);

        Some(Self::new(reporter, YearRange::new(from, last)))
    }

    /// Human-readable description of the applied filters
    pub fn caption(&self) -> String {
        format!(
            "Reporting Country: {}, Years: {}-{}",
            self.reporter, self.years.from, self.years.to
        )
    }
}
