use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::constants::TVL_DATE_FORMAT;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const US_DATE_FORMAT: &str = "%m/%d/%Y";

    /// Day 0 of the plot x axis.
    pub const PLOT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
        Some(d) => d,
        None => panic!("invalid plot epoch"),
    };

    /// Parse a `DD/MM/YYYY` header cell from a locked-value table.
    pub fn parse_dmy(text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), TVL_DATE_FORMAT)
            .with_context(|| format!("'{}' is not a DD/MM/YYYY date", text))
    }

    /// Drop intraday precision: keep the leading `YYYY-MM-DD` and parse it.
    /// e.g. "2024-03-01 00:00:00 UTC" and "2024-03-01T17:22:10.000Z" both give 2024-03-01.
    pub fn truncate_to_day(timestamp: &str) -> Result<NaiveDate> {
        let trimmed = timestamp.trim();
        let day = trimmed
            .get(..10)
            .with_context(|| format!("timestamp '{}' is shorter than a date", timestamp))?;
        NaiveDate::parse_from_str(day, Self::STANDARD_TIME_FORMAT)
            .with_context(|| format!("timestamp '{}' does not start with YYYY-MM-DD", timestamp))
    }

    /// Lenient parser for exports whose date format is not pinned down.
    /// Accepts ISO dates (optionally followed by a time), RFC 3339, `MM/DD/YYYY`,
    /// and integer epoch seconds.
    pub fn parse_flexible_date(text: &str) -> Result<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            bail!("empty date");
        }

        if let Ok(d) = NaiveDate::parse_from_str(text, Self::STANDARD_TIME_FORMAT) {
            return Ok(d);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Ok(dt.date());
        }
        if let Ok(d) = NaiveDate::parse_from_str(text, Self::US_DATE_FORMAT) {
            return Ok(d);
        }
        if let Ok(secs) = text.parse::<i64>() {
            if let Some(dt) = DateTime::from_timestamp(secs, 0) {
                return Ok(dt.date_naive());
            }
        }
        // "2024-01-01 00:00:00 UTC" and similar suffixed forms
        Self::truncate_to_day(text).with_context(|| format!("unrecognised date '{}'", text))
    }

    /// Days since the Unix epoch, as used on the plot x axis.
    pub fn date_to_plot_x(date: NaiveDate) -> f64 {
        (date - Self::PLOT_EPOCH).num_days() as f64
    }

    /// Inverse of `date_to_plot_x`, rounding to the nearest day.
    pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() {
            return None;
        }
        let days = x.round() as i64;
        Self::PLOT_EPOCH.checked_add_signed(chrono::Duration::try_days(days)?)
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::STANDARD_TIME_FORMAT).to_string()
    }
}
