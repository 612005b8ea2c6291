use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Every numeric column of a chain table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Metric {
    #[strum(to_string = "TVL")]
    Tvl,
    #[strum(to_string = "price")]
    Price,
    #[strum(to_string = "market_cap")]
    MarketCap,
    #[strum(to_string = "total_volume")]
    TotalVolume,
    #[strum(to_string = "StablesMCap")]
    StablesMCap,
    #[strum(to_string = "StakingRewards")]
    StakingRewards,
    #[strum(to_string = "StakedAmount")]
    StakedAmount,
    #[strum(to_string = "Liquidity")]
    Liquidity,
    #[strum(to_string = "InterestRate")]
    InterestRate,
}
