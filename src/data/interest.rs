//! Shared macro interest-rate series: headerless CSV of `index,date,rate`.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::DF;
use crate::data::csv_utils::{csv_reader, finite, open_file};
use crate::models::DailySeries;
use crate::utils::TimeUtils;

/// Returns the `InterestRate` series.
pub fn load_interest_rates(path: &Path) -> Result<DailySeries> {
    let series = parse_interest_rates(open_file(path)?).with_context(|| format!("in {:?}", path))?;
    if DF.log_normalizers {
        log::info!("Interest rates {:?}: {} days", path, series.len());
    }
    Ok(series)
}

pub fn parse_interest_rates<R: Read>(reader: R) -> Result<DailySeries> {
    let mut rdr = csv_reader(reader, false);
    let mut series = DailySeries::new();

    for (idx, result) in rdr.deserialize::<(String, String, Option<f64>)>().enumerate() {
        let (_, date, rate) = result.with_context(|| format!("interest rate row {}", idx + 1))?;
        let date = TimeUtils::parse_flexible_date(&date)?;
        if let Some(rate) = finite(rate) {
            series.insert(date, rate);
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_first_column_is_discarded() {
        let csv = "0,2024-01-01,5.33\n1,2024-01-02,5.31\n2,2024-01-03,\n";
        let series = parse_interest_rates(csv.as_bytes()).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.get(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()), Some(5.31));
    }

    #[test]
    fn test_two_column_file_is_rejected() {
        assert!(parse_interest_rates("2024-01-01,5.33\n".as_bytes()).is_err());
    }
}
