//! Daily price exports (CoinGecko format: snapped_at, price, market_cap, total_volume).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::DF;
use crate::config::constants::price_columns;
use crate::data::csv_utils::{csv_reader, finite, open_file, require_columns};
use crate::models::{PricePoint, PriceSeries};
use crate::utils::TimeUtils;

#[derive(Debug, Deserialize)]
struct PriceRecord {
    snapped_at: String,
    price: Option<f64>,
    market_cap: Option<f64>,
    total_volume: Option<f64>,
}

pub fn load_price(path: &Path) -> Result<PriceSeries> {
    let series = parse_price(open_file(path)?).with_context(|| format!("in {:?}", path))?;
    if DF.log_normalizers {
        log::info!("Price {:?}: {} days", path, series.len());
    }
    Ok(series)
}

/// Truncates each snapshot to its calendar day. Several snapshots on one day collapse to the last one.
pub fn parse_price<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut rdr = csv_reader(reader, true);
    require_columns(
        &mut rdr,
        &[
            price_columns::TIMESTAMP,
            price_columns::PRICE,
            price_columns::MARKET_CAP,
            price_columns::TOTAL_VOLUME,
        ],
    )?;
    let mut series = PriceSeries::new();

    for (idx, result) in rdr.deserialize::<PriceRecord>().enumerate() {
        let record = result.with_context(|| format!("price row {}", idx + 2))?;
        let date = TimeUtils::truncate_to_day(&record.snapped_at)?;
        series.insert(
            date,
            PricePoint {
                price: finite(record.price),
                market_cap: finite(record.market_cap),
                total_volume: finite(record.total_volume),
            },
        );
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_intraday_snapshots_collapse_to_one_row_per_day() {
        let csv = "\
snapped_at,price,market_cap,total_volume
2024-01-01 00:00:00 UTC,1.0,100,10
2024-01-02 00:00:00 UTC,2.0,200,20
2024-01-02 13:45:00 UTC,2.5,250,25
2024-01-03 00:00:00 UTC,3.0,,30
";
        let series = parse_price(csv.as_bytes()).unwrap();

        assert_eq!(series.len(), 3);
        let jan2 = series[&NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()];
        assert_eq!(jan2.price, Some(2.5));
        assert_eq!(jan2.market_cap, Some(250.0));
        let jan3 = series[&NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()];
        assert_eq!(jan3.market_cap, None);
        assert_eq!(jan3.total_volume, Some(30.0));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "snapped_at,price,market_cap,total_volume,source\n2024-05-01 00:00:00 UTC,1,2,3,cg\n";
        let series = parse_price(csv.as_bytes()).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_missing_timestamp_column_is_an_error() {
        let csv = "time,price,market_cap,total_volume\n2024-05-01,1,2,3\n";
        assert!(parse_price(csv.as_bytes()).is_err());
    }
}
