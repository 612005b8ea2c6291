//! Stablecoin market cap exports (DefiLlama format: Date, per-coin columns..., Total).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::DF;
use crate::config::constants::stables_columns;
use crate::data::csv_utils::{csv_reader, finite, open_file, require_columns};
use crate::models::DailySeries;
use crate::utils::TimeUtils;

#[derive(Debug, Deserialize)]
struct StablesRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Total")]
    total: Option<f64>,
}

/// Returns the `StablesMCap` series.
pub fn load_stables(path: &Path) -> Result<DailySeries> {
    let series = parse_stables(open_file(path)?).with_context(|| format!("in {:?}", path))?;
    if DF.log_normalizers {
        log::info!("Stablecoins {:?}: {} days", path, series.len());
    }
    Ok(series)
}

pub fn parse_stables<R: Read>(reader: R) -> Result<DailySeries> {
    let mut rdr = csv_reader(reader, true);
    require_columns(&mut rdr, &[stables_columns::DATE, stables_columns::TOTAL])?;
    let mut series = DailySeries::new();

    for (idx, result) in rdr.deserialize::<StablesRecord>().enumerate() {
        let record = result.with_context(|| format!("stablecoin row {}", idx + 2))?;
        let date = TimeUtils::parse_flexible_date(&record.date)?;
        if let Some(total) = finite(record.total) {
            series.insert(date, total);
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_total_column_becomes_the_series() {
        let csv = "Date,USDT,USDC,Total\n2024-01-01,5,5,10\n2024-01-02,6,,\n2024-01-03,7,8,15\n";
        let series = parse_stables(csv.as_bytes()).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.get(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), Some(10.0));
        assert_eq!(series.get(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()), None);
    }

    #[test]
    fn test_missing_total_column_is_an_error() {
        let csv = "Date,USDT\n2024-01-01,5\n";
        assert!(parse_stables(csv.as_bytes()).is_err());
    }
}
