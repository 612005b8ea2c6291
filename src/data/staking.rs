//! Staking metric documents. Both normalizers read `data.assets[0].metrics`
//! through `metrics_at_path`, so a change in document shape breaks them together.

use std::error::Error;
use std::fmt;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::DF;
use crate::config::constants::staking::{METRIC_KEY_REWARD_RATE, METRIC_KEY_STAKED_TOKENS};
use crate::data::csv_utils::{finite, open_file};
use crate::models::DailySeries;
use crate::utils::TimeUtils;

#[derive(Debug)]
pub enum StakingDocError {
    /// `data.assets` is present but empty.
    NoAssets,
    /// A metric's `createdAt` could not be read as a date.
    InvalidTimestamp(String),
}

impl fmt::Display for StakingDocError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StakingDocError::NoAssets => write!(f, "data.assets is empty"),
            StakingDocError::InvalidTimestamp(ts) => write!(f, "invalid createdAt '{}'", ts),
        }
    }
}

impl Error for StakingDocError {}

#[derive(Debug, Deserialize)]
struct StakingDocument {
    data: StakingData,
}

#[derive(Debug, Deserialize)]
struct StakingData {
    assets: Vec<StakingAsset>,
}

#[derive(Debug, Deserialize)]
struct StakingAsset {
    metrics: Vec<MetricRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub created_at: String,
    #[serde(default)]
    pub default_value: Option<f64>,
    #[serde(default)]
    pub metric_key: Option<String>,
}

/// Which value a staking normalizer extracts from the shared document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingField {
    /// `StakingRewards`. Records without a `metricKey` count as reward rate.
    RewardRate,
    /// `StakedAmount`.
    StakedAmount,
}

impl StakingField {
    fn accepts(&self, record: &MetricRecord) -> bool {
        match (self, record.metric_key.as_deref()) {
            (StakingField::RewardRate, None) => true,
            (StakingField::RewardRate, Some(key)) => key == METRIC_KEY_REWARD_RATE,
            (StakingField::StakedAmount, Some(key)) => key == METRIC_KEY_STAKED_TOKENS,
            (StakingField::StakedAmount, None) => false,
        }
    }
}

/// Flattens `data.assets[0].metrics`.
pub fn metrics_at_path<R: Read>(reader: R) -> Result<Vec<MetricRecord>> {
    let doc: StakingDocument =
        serde_json::from_reader(reader).context("staking document does not match data.assets[].metrics")?;
    let first = doc
        .data
        .assets
        .into_iter()
        .next()
        .ok_or(StakingDocError::NoAssets)?;
    Ok(first.metrics)
}

pub fn parse_staking<R: Read>(reader: R, field: StakingField) -> Result<DailySeries> {
    let mut series = DailySeries::new();
    for record in metrics_at_path(reader)? {
        if !field.accepts(&record) {
            continue;
        }
        let date = TimeUtils::truncate_to_day(&record.created_at)
            .map_err(|_| StakingDocError::InvalidTimestamp(record.created_at.clone()))?;
        if let Some(value) = finite(record.default_value) {
            series.insert(date, value);
        }
    }
    Ok(series)
}

fn load_staking(path: &Path, field: StakingField) -> Result<DailySeries> {
    let series = parse_staking(open_file(path)?, field).with_context(|| format!("in {:?}", path))?;
    if DF.log_normalizers {
        log::info!("Staking {:?} {:?}: {} days", field, path, series.len());
    }
    Ok(series)
}

pub fn load_staking_rewards(path: &Path) -> Result<DailySeries> {
    load_staking(path, StakingField::RewardRate)
}

pub fn load_staking_amounts(path: &Path) -> Result<DailySeries> {
    load_staking(path, StakingField::StakedAmount)
}
