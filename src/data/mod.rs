mod csv_utils;
mod dataset;
mod interest;
mod merge;
mod price;
mod stables;
mod staking;
mod tvl;

pub use {
    dataset::{build_chain_table, build_dataset, load_chain_inputs},
    interest::{load_interest_rates, parse_interest_rates},
    merge::{ChainInputs, attach_interest_rates, liquidity, merge_chain},
    price::{load_price, parse_price},
    stables::{load_stables, parse_stables},
    staking::{
        MetricRecord, StakingDocError, StakingField, load_staking_amounts, load_staking_rewards,
        metrics_at_path, parse_staking,
    },
    tvl::{load_tvl, parse_tvl},
};
