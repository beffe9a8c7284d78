//! Product-category composition (pie chart view).
//!
//! Groups rows by HS2 category, ranks the groups by the chosen flow and keeps
//! the top `TOP_CATEGORIES`. Everything ranked below is summed into a single
//! `OTHER` slice appended at the end, so the slice values always add up to the
//! flow total of the input rows.

use crate::data::{Flow, TradeRecord};
use crate::utils::config::{DISPLAY_NAME_LIMIT, ELLIPSIS, OTHER_CODE, OTHER_NAME, TOP_CATEGORIES};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    /// HS2 code (`OTHER_CODE` for the collapse row)
    pub code: u32,

    /// Display name, cut to `DISPLAY_NAME_LIMIT` characters
    pub name: String,

    /// Summed flow value
    pub value: Decimal,
}

impl CategorySlice {
    pub fn new(code: u32, name: &str, value: Decimal) -> Self {
        Self {
            code,
            name: display_name(name),
            value,
        }
    }

    pub fn is_other(&self) -> bool {
        self.code == OTHER_CODE && self.name == OTHER_NAME
    }
}

/// Group rows by category and collapse the tail into `OTHER`
///
/// **Public** - main entry point for the composition view
///
/// # Returns
/// At most `TOP_CATEGORIES + 1` slices, descending by value, with the
/// `OTHER` slice (if any) last. Ties rank by ascending code, then name.
pub fn compose_categories<'a>(
    rows: impl IntoIterator<Item = &'a TradeRecord>,
    flow: Flow,
) -> Vec<CategorySlice> {
    let mut groups: BTreeMap<(u32, &str), Decimal> = BTreeMap::new();

    for row in rows {
        *groups.entry((row.hs2_code, row.hs2_name.as_str())).or_insert(Decimal::ZERO) += row.flow(flow);
    }

    let mut ranked: Vec<((u32, &str), Decimal)> = groups.into_iter().collect();
    // Stable sort keeps BTreeMap key order among equal values
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    debug!("Composing {} {} categories", ranked.len(), flow);

    let remainder = ranked.split_off(ranked.len().min(TOP_CATEGORIES));

    let mut slices: Vec<CategorySlice> = ranked
        .into_iter()
        .map(|((code, name), value)| CategorySlice::new(code, name, value))
        .collect();

    if !remainder.is_empty() {
        let other: Decimal = remainder.iter().map(|(_, value)| value).sum();
        debug!("Collapsing {} categories into {}", remainder.len(), OTHER_NAME);
        slices.push(CategorySlice::new(OTHER_CODE, OTHER_NAME, other));
    }

    slices
}

/// Cut a category name to its display form
///
/// **Public** - names longer than `DISPLAY_NAME_LIMIT` characters keep the
/// first `DISPLAY_NAME_LIMIT` characters followed by `ELLIPSIS`
pub fn display_name(name: &str) -> String {
    match name.char_indices().nth(DISPLAY_NAME_LIMIT) {
        Some((cut, _)) => format!("{}{}", &name[..cut], ELLIPSIS),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rows_with_categories(count: u32) -> Vec<TradeRecord> {
        // Category n carries value n, so ranking is the reverse of the code order
        (1..=count)
            .map(|n| TradeRecord::new("AT", "DE", 2018, n, format!("Category {n}"), Decimal::from(n), dec!(0)))
            .collect()
    }

    #[test]
    fn test_ten_categories_no_other() {
        let slices = compose_categories(&rows_with_categories(10), Flow::Imports);
        assert_eq!(slices.len(), 10);
        assert!(slices.iter().all(|s| !s.is_other()));
        assert_eq!(slices[0].code, 10);
        assert_eq!(slices[9].code, 1);
    }

    #[test]
    fn test_eleven_categories_other_is_eleventh() {
        let slices = compose_categories(&rows_with_categories(11), Flow::Imports);
        assert_eq!(slices.len(), 11);
        let other = slices.last().unwrap();
        assert!(other.is_other());
        // Ranked 11th is category 1 with value 1
        assert_eq!(other.value, dec!(1));
    }

    #[test]
    fn test_fifteen_categories_other_sums_tail() {
        let slices = compose_categories(&rows_with_categories(15), Flow::Imports);
        assert_eq!(slices.len(), 11);
        assert_eq!(slices[0].value, dec!(15));
        // Ranks 11-15 are categories 5,4,3,2,1
        assert_eq!(slices[10].value, dec!(15));
        assert_eq!(slices[10].code, OTHER_CODE);
        assert_eq!(slices[10].name, OTHER_NAME);
    }

    #[test]
    fn test_groups_sum_duplicate_keys() {
        let rows = vec![
            TradeRecord::new("AT", "DE", 2018, 1, "Live animals", dec!(10), dec!(5)),
            TradeRecord::new("AT", "FR", 2019, 1, "Live animals", dec!(20), dec!(0)),
            TradeRecord::new("AT", "FR", 2018, 2, "Meat", dec!(3), dec!(7)),
        ];
        let imports = compose_categories(&rows, Flow::Imports);
        assert_eq!(imports, vec![
            CategorySlice::new(1, "Live animals", dec!(30)),
            CategorySlice::new(2, "Meat", dec!(3)),
        ]);

        let exports = compose_categories(&rows, Flow::Exports);
        assert_eq!(exports[0].name, "Meat");
        assert_eq!(exports[0].value, dec!(7));
    }

    #[test]
    fn test_ties_rank_by_code() {
        let rows = vec![
            TradeRecord::new("AT", "DE", 2018, 7, "Seven", dec!(1), dec!(0)),
            TradeRecord::new("AT", "DE", 2018, 3, "Three", dec!(1), dec!(0)),
        ];
        let slices = compose_categories(&rows, Flow::Imports);
        assert_eq!(slices[0].code, 3);
        assert_eq!(slices[1].code, 7);
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<TradeRecord> = Vec::new();
        assert!(compose_categories(&rows, Flow::Exports).is_empty());
    }

    #[test]
    fn test_display_name_limits() {
        let ten = "Fish stock";
        let exact = "a".repeat(32);
        let long = "b".repeat(33);

        assert_eq!(display_name(ten), ten);
        assert_eq!(display_name(&exact), exact);
        assert_eq!(display_name(&long), format!("{}...", "b".repeat(32)));
    }

    #[test]
    fn test_display_name_counts_characters() {
        let name = "é".repeat(33);
        let cut = display_name(&name);
        assert_eq!(cut.chars().count(), 35);
        assert!(cut.ends_with("..."));
    }
}
