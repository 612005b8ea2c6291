//! Locked-value tables: one row per protocol (plus a "Total" row), one column per date.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::DF;
use crate::config::constants::{TVL_START_DATE, TVL_TOTAL_LABEL};
use crate::data::csv_utils::{csv_reader, open_file, parse_optional_f64};
use crate::models::TvlPoint;
use crate::utils::TimeUtils;

pub fn load_tvl(path: &Path) -> Result<Vec<TvlPoint>> {
    let points = parse_tvl(open_file(path)?).with_context(|| format!("in {:?}", path))?;
    if DF.log_normalizers {
        log::info!("TVL {:?}: {} rows", path, points.len());
    }
    Ok(points)
}

/// Melts the date columns into rows, keeps the "Total" category and drops dates before 2024.
/// A table without a "Total" row yields an empty result.
pub fn parse_tvl<R: Read>(reader: R) -> Result<Vec<TvlPoint>> {
    let mut rdr = csv_reader(reader, true);

    // First header names the category column; every other header is a date.
    let dates: Vec<NaiveDate> = rdr
        .headers()
        .context("Failed to read TVL header")?
        .iter()
        .skip(1)
        .map(TimeUtils::parse_dmy)
        .collect::<Result<_>>()?;

    let mut points = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("TVL row {}", idx + 2))?;
        let is_total = record.get(0).is_some_and(|c| c == TVL_TOTAL_LABEL);
        if !is_total {
            continue;
        }

        for (col, date) in dates.iter().enumerate() {
            if *date < TVL_START_DATE {
                continue;
            }
            let value = match record.get(col + 1) {
                Some(cell) => parse_optional_f64(cell)
                    .with_context(|| format!("TVL Total on {}", date))?,
                None => None,
            };
            points.push(TvlPoint { date: *date, value });
        }
    }

    Ok(points)
}
