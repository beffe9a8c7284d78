//! Trade by partner (bar chart view).

use crate::data::TradeRecord;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summed flows with one partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerFlow {
    pub partner: String,
    pub imports_mn: Decimal,
    pub exports_mn: Decimal,
}

impl PartnerFlow {
    pub fn new(partner: impl Into<String>, imports_mn: Decimal, exports_mn: Decimal) -> Self {
        Self {
            partner: partner.into(),
            imports_mn,
            exports_mn,
        }
    }
}

/// Group rows by partner and sum both flows
///
/// **Public** - output is ordered alphabetically by partner
pub fn aggregate_by_partner<'a>(rows: impl IntoIterator<Item = &'a TradeRecord>) -> Vec<PartnerFlow> {
    let mut groups: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();

    for row in rows {
        let entry = groups.entry(row.partner.as_str()).or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += row.imports_mn;
        entry.1 += row.exports_mn;
    }

    debug!("Aggregated {} partners", groups.len());

    groups
        .into_iter()
        .map(|(partner, (imports, exports))| PartnerFlow::new(partner, imports, exports))
        .collect()
}
