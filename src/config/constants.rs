use chrono::NaiveDate;

// Locked-value tables
pub const TVL_TOTAL_LABEL: &str = "Total";
pub const TVL_DATE_FORMAT: &str = "%d/%m/%Y";
/// Dates before this are discarded by the locked-value normalizer.
pub const TVL_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(d) => d,
    None => panic!("invalid TVL start date"),
};

// Price exports (CoinGecko column names)
pub mod price_columns {
    pub const TIMESTAMP: &str = "snapped_at";
    pub const PRICE: &str = "price";
    pub const MARKET_CAP: &str = "market_cap";
    pub const TOTAL_VOLUME: &str = "total_volume";
}

// Stablecoin exports (DefiLlama column names)
pub mod stables_columns {
    pub const DATE: &str = "Date";
    pub const TOTAL: &str = "Total";
}

// Staking documents
pub mod staking {
    pub const METRIC_KEY_REWARD_RATE: &str = "reward_rate";
    pub const METRIC_KEY_STAKED_TOKENS: &str = "staked_tokens";
}

/// Liquidity is reported as a percentage.
pub const LIQUIDITY_SCALE: f64 = 100.0;
