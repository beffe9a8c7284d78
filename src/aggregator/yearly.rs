//! Trade volume over time (line chart view).

use crate::data::TradeRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summed flows for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyFlow {
    pub year: i32,
    pub imports_mn: Decimal,
    pub exports_mn: Decimal,
}

impl YearlyFlow {
    pub fn new(year: i32, imports_mn: Decimal, exports_mn: Decimal) -> Self {
        Self {
            year,
            imports_mn,
            exports_mn,
        }
    }
}

/// Group rows by year and sum both flows, ascending by year
pub fn aggregate_by_year<'a>(rows: impl IntoIterator<Item = &'a TradeRecord>) -> Vec<YearlyFlow> {
    let mut groups: BTreeMap<i32, (Decimal, Decimal)> = BTreeMap::new();

    for row in rows {
        let entry = groups.entry(row.year).or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += row.imports_mn;
        entry.1 += row.exports_mn;
    }

    groups
        .into_iter()
        .map(|(year, (imports, exports))| YearlyFlow::new(year, imports, exports))
        .collect()
}
