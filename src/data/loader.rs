//! Delimited-file loader for the trade table.
//!
//! Contract:
//! - The header row must contain every column in `REQUIRED_COLUMNS`; extra
//!   columns are ignored. A missing column is fatal.
//! - A row with a missing or unparseable field, a negative volume, or bytes
//!   that are not valid UTF-8 is rejected and excluded. The load continues.
//! - Volumes are read as exact decimals, never through binary floats.
//! - A file that yields no valid row at all is fatal.

use super::record::TradeRecord;
use super::table::TradeTable;
use crate::utils::config::{
    COL_EXPORTS, COL_HS2, COL_HS2_NAME, COL_IMPORTS, COL_PARTNER, COL_REPORTER, COL_YEAR,
    REQUIRED_COLUMNS,
};
use crate::utils::error::LoadError;
use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Row shape as it appears in the source file
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "REPORTER")]
    reporter: String,
    #[serde(rename = "PARTNER")]
    partner: String,
    #[serde(rename = "YEAR")]
    year: i32,
    #[serde(rename = "HS2")]
    hs2: u32,
    #[serde(rename = "HS2_NAME")]
    hs2_name: String,
    #[serde(rename = "IMPORTS_MN")]
    imports_mn: Option<String>,
    #[serde(rename = "EXPORTS_MN")]
    exports_mn: Option<String>,
}

/// A row excluded during load
#[derive(Debug, Clone, PartialEq)]
pub struct RowRejection {
    /// 1-based line in the source file
    pub line: u64,
    pub reason: String,
}

/// Loaded table plus load bookkeeping
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: TradeTable,
    pub rows_read: usize,
    pub rejected: Vec<RowRejection>,
}

/// Load the trade table from a delimited file
///
/// **Public** - main entry point for the table load
///
/// # Errors
/// * `LoadError::Io` - file missing or unreadable
/// * `LoadError::Csv` - header row unreadable, or an I/O failure mid-file
/// * `LoadError::MissingColumn` - header lacks a required column
/// * `LoadError::NoValidRecords` - every row was rejected
pub fn load_table(path: impl AsRef<Path>, delimiter: u8) -> Result<LoadedTable, LoadError> {
    let path = path.as_ref();
    info!("Loading trade table from: {}", path.display());

    let file = File::open(path)?;
    read_table(file, delimiter, &path.display().to_string())
}

/// Load the trade table from any reader
///
/// **Public** - used by `load_table` and by tests with in-memory input
pub fn read_table<R: Read>(
    reader: R,
    delimiter: u8,
    source: &str,
) -> Result<LoadedTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    check_headers(&headers)?;

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    let mut rows_read = 0;

    for result in reader.records() {
        rows_read += 1;

        let row = match result {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                // Record-level failure (bad UTF-8, malformed quoting); the reader
                // has already moved past it
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                warn!("Rejected row at line {}: {}", line, e);
                rejected.push(RowRejection {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        match parse_row(&row, &headers) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!("Rejected row at line {}: {}", line, reason);
                rejected.push(RowRejection { line, reason });
            }
        }
    }

    if records.is_empty() {
        return Err(LoadError::NoValidRecords {
            path: source.to_string(),
            rejected: rejected.len(),
        });
    }

    info!(
        "Loaded {} trade records ({} rows read, {} rejected)",
        records.len(),
        rows_read,
        rejected.len()
    );

    Ok(LoadedTable {
        table: TradeTable::from_records(records),
        rows_read,
        rejected,
    })
}

/// Verify that every required column is present
///
/// **Private** - internal validation
fn check_headers(headers: &StringRecord) -> Result<(), LoadError> {
    debug!("Table header: {:?}", headers);

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Turn one source row into a validated record
///
/// **Private** - returns the rejection reason on failure
fn parse_row(row: &StringRecord, headers: &StringRecord) -> Result<TradeRecord, String> {
    let raw: RawRecord = row.deserialize(Some(headers)).map_err(|e| e.to_string())?;

    if raw.reporter.is_empty() {
        return Err(format!("empty {}", COL_REPORTER));
    }
    if raw.partner.is_empty() {
        return Err(format!("empty {}", COL_PARTNER));
    }
    if raw.hs2_name.is_empty() {
        return Err(format!("empty {} for {} {}", COL_HS2_NAME, COL_HS2, raw.hs2));
    }

    let imports_mn = parse_volume(COL_IMPORTS, raw.imports_mn.as_deref())?;
    let exports_mn = parse_volume(COL_EXPORTS, raw.exports_mn.as_deref())?;

    if raw.year <= 0 {
        return Err(format!("invalid {} {}", COL_YEAR, raw.year));
    }

    Ok(TradeRecord {
        reporter: raw.reporter,
        partner: raw.partner,
        year: raw.year,
        hs2_code: raw.hs2,
        hs2_name: raw.hs2_name,
        imports_mn,
        exports_mn,
    })
}

/// Parse a volume cell as an exact decimal
///
/// **Private** - accepts plain (`12.5`) and scientific (`1.25e1`) notation
fn parse_volume(column: &str, value: Option<&str>) -> Result<Decimal, String> {
    let text = match value {
        None | Some("") => return Err(format!("missing {}", column)),
        Some(text) => text,
    };

    let volume = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| format!("invalid {} {:?}", column, text))?;

    if volume.is_sign_negative() && !volume.is_zero() {
        return Err(format!("negative {} {}", column, volume));
    }
    Ok(volume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "REPORTER,PARTNER,YEAR,HS2,HS2_NAME,IMPORTS_MN,EXPORTS_MN\n";

    fn load(body: &str) -> Result<LoadedTable, LoadError> {
        let input = format!("{}{}", HEADER, body);
        read_table(input.as_bytes(), b',', "inline")
    }

    #[test]
    fn test_read_valid_rows() {
        let loaded = load(
            "Austria,Germany,2018,01,Live animals,10,5\n\
             Austria,France,2018,02,Meat,3.5,7\n",
        )
        .unwrap();

        assert_eq!(loaded.rows_read, 2);
        assert!(loaded.rejected.is_empty());
        assert_eq!(loaded.table.len(), 2);

        let first = &loaded.table.records()[0];
        assert_eq!(first.hs2_code, 1);
        assert_eq!(first.hs2_name, "Live animals");
        assert_eq!(first.imports_mn, dec!(10));
        assert_eq!(loaded.table.records()[1].imports_mn, dec!(3.5));
    }

    #[test]
    fn test_rejects_negative_and_missing_volumes() {
        let loaded = load(
            "Austria,Germany,2018,01,Live animals,10,5\n\
             Austria,France,2018,02,Meat,-1,7\n\
             Austria,Italy,2018,03,Fish,,7\n",
        )
        .unwrap();

        assert_eq!(loaded.rows_read, 3);
        assert_eq!(loaded.table.len(), 1);
        assert_eq!(loaded.rejected.len(), 2);
        assert_eq!(loaded.rejected[0].line, 3);
        assert!(loaded.rejected[0].reason.contains("negative"));
        assert!(loaded.rejected[1].reason.contains("missing"));
    }

    #[test]
    fn test_rejects_unparseable_year() {
        let loaded = load(
            "Austria,Germany,2018,01,Live animals,10,5\n\
             Austria,France,twenty,02,Meat,1,7\n",
        )
        .unwrap();

        assert_eq!(loaded.table.len(), 1);
        assert_eq!(loaded.rejected.len(), 1);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let input = "REPORTER,PARTNER,YEAR,HS2,HS2_NAME,IMPORTS_MN\nAustria,Germany,2018,01,x,1\n";
        let result = read_table(input.as_bytes(), b',', "inline");
        assert!(matches!(result, Err(LoadError::MissingColumn(c)) if c == "EXPORTS_MN"));
    }

    #[test]
    fn test_no_valid_rows_is_fatal() {
        let result = load("Austria,Germany,2018,01,Live animals,-10,5\n");
        assert!(matches!(
            result,
            Err(LoadError::NoValidRecords { rejected: 1, .. })
        ));
    }

    #[test]
    fn test_custom_delimiter_and_extra_columns() {
        let input = "REPORTER;PARTNER;YEAR;HS2;HS2_NAME;IMPORTS_MN;EXPORTS_MN;NOTE\n\
                     Austria;Germany;2019;5;Products of animal origin;1.25;2;x\n";
        let loaded = read_table(input.as_bytes(), b';', "inline").unwrap();
        assert_eq!(loaded.table.len(), 1);
        assert_eq!(loaded.table.records()[0].imports_mn, dec!(1.25));
        assert_eq!(loaded.table.records()[0].exports_mn, dec!(2));
    }

    #[test]
    fn test_volumes_parse_exactly() {
        let loaded = load(
            "Austria,Germany,2018,01,Live animals,0.1,1.1\n\
             Austria,Germany,2018,02,Meat,0.2,2.5e-1\n",
        )
        .unwrap();

        let records = loaded.table.records();
        let imports: Decimal = records.iter().map(|r| r.imports_mn).sum();
        assert_eq!(imports, dec!(0.3));
        assert_eq!(records[1].exports_mn, dec!(0.25));
    }

    #[test]
    fn test_rejects_non_numeric_volume() {
        let loaded = load(
            "Austria,Germany,2018,01,Live animals,10,5\n\
             Austria,France,2018,02,Meat,NaN,7\n",
        )
        .unwrap();

        assert_eq!(loaded.table.len(), 1);
        assert_eq!(loaded.rejected[0].line, 3);
        assert!(loaded.rejected[0].reason.contains("invalid IMPORTS_MN"));
    }

    #[test]
    fn test_invalid_utf8_row_is_rejected_not_fatal() {
        let mut input = HEADER.as_bytes().to_vec();
        input.extend_from_slice(b"Austria,Germany,2018,01,Live animals,10,5\n");
        input.extend_from_slice(b"Austria,France,2018,02,Me\xffat,3,7\n");
        input.extend_from_slice(b"Austria,Italy,2018,03,Fish,1,2\n");

        let loaded = read_table(input.as_slice(), b',', "inline").unwrap();

        assert_eq!(loaded.rows_read, 3);
        assert_eq!(loaded.table.len(), 2);
        assert_eq!(loaded.rejected.len(), 1);
        assert_eq!(loaded.rejected[0].line, 3);
        assert_eq!(loaded.table.records()[1].partner, "Italy");
    }
}
