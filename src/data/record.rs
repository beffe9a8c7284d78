//! Trade record definition and flow selection.

use crate::utils::error::ParseFlowError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the trade table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Country whose trade is recorded
    pub reporter: String,

    /// Counterpart country
    pub partner: String,

    /// Calendar year
    pub year: i32,

    /// HS2 product-category code
    pub hs2_code: u32,

    /// HS2 product-category name
    pub hs2_name: String,

    /// Import volume (millions)
    pub imports_mn: Decimal,

    /// Export volume (millions)
    pub exports_mn: Decimal,
}

impl TradeRecord {
    pub fn new(
        reporter: impl Into<String>,
        partner: impl Into<String>,
        year: i32,
        hs2_code: u32,
        hs2_name: impl Into<String>,
        imports_mn: Decimal,
        exports_mn: Decimal,
    ) -> Self {
        Self {
            reporter: reporter.into(),
            partner: partner.into(),
            year,
            hs2_code,
            hs2_name: hs2_name.into(),
            imports_mn,
            exports_mn,
        }
    }

    /// Volume of the given flow
    pub fn flow(&self, flow: Flow) -> Decimal {
        match flow {
            Flow::Imports => self.imports_mn,
            Flow::Exports => self.exports_mn,
        }
    }
}

/// Direction of trade, summed independently everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Imports,
    Exports,
}

impl Flow {
    pub const ALL: [Flow; 2] = [Flow::Imports, Flow::Exports];

    /// Capitalised label used in chart titles
    pub fn label(&self) -> &'static str {
        match self {
            Flow::Imports => "Imports",
            Flow::Exports => "Exports",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Imports => f.write_str("imports"),
            Flow::Exports => f.write_str("exports"),
        }
    }
}

impl FromStr for Flow {
    type Err = ParseFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imports" | "import" => Ok(Flow::Imports),
            "exports" | "export" => Ok(Flow::Exports),
            _ => Err(ParseFlowError(s.to_string())),
        }
    }
}
