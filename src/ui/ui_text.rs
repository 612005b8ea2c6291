use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Top panel ---
    pub label_chain_select: String,
    pub cb_staking_rewards: String,
    pub cb_tvl: String,
    pub cb_price: String,
    pub cb_staked_amount: String,

    // --- Side panel ---
    pub sp_correlations_heading: String,
    pub sp_correlations_empty: String,
    pub sp_rows: String,
    pub sp_date_range: String,
    pub sp_shortcuts_hint: String,

    // --- Central panel ---
    pub cp_no_series: String,
    pub cp_missing_chain: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Interactive Blockchain Data Plot".to_string(),

    label_chain_select: "Select a Blockchain:".to_string(),
    cb_staking_rewards: "Show StakingRewards".to_string(),
    cb_tvl: "Show TVL".to_string(),
    cb_price: "Show Price".to_string(),
    cb_staked_amount: "Show StakedAmount".to_string(),

    sp_correlations_heading: "Correlations".to_string(),
    sp_correlations_empty: "Not enough overlapping data".to_string(),
    sp_rows: "Rows".to_string(),
    sp_date_range: "Dates".to_string(),
    sp_shortcuts_hint: "Keys 1-4 toggle series".to_string(),

    cp_no_series: "No series selected".to_string(),
    cp_missing_chain: "No data loaded for this chain".to_string(),
});
