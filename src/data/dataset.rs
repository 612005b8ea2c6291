use std::path::Path;

use anyhow::{Context, Result};
use strum::IntoEnumIterator;

use crate::config::{ChainSources, INTEREST_RATES_PATH};
use crate::data::{
    ChainInputs, attach_interest_rates, load_interest_rates, load_price, load_stables,
    load_staking_amounts, load_staking_rewards, load_tvl, merge_chain,
};
use crate::domain::ChainId;
use crate::models::{ChainTable, DailySeries, Dataset};

/// Reads every input file of one chain.
pub fn load_chain_inputs(root: &Path, sources: &ChainSources) -> Result<ChainInputs> {
    Ok(ChainInputs {
        tvl: load_tvl(&sources.tvl_path(root))?,
        price: load_price(&sources.price_path(root))?,
        stables: load_stables(&sources.stables_path(root))?,
        staking_rewards: load_staking_rewards(&sources.staking_path(root))?,
        staked_amount: load_staking_amounts(&sources.staking_path(root))?,
    })
}

/// Normalize, merge, join interest rates, drop exact duplicate rows.
pub fn build_chain_table(root: &Path, chain: ChainId, rates: &DailySeries) -> Result<ChainTable> {
    let sources = ChainSources::for_chain(chain);
    let inputs = load_chain_inputs(root, &sources)?;

    let mut table = merge_chain(chain, &inputs);
    attach_interest_rates(&mut table, rates);

    let removed = table.drop_duplicate_rows();
    if removed > 0 {
        log::warn!("{}: dropped {} duplicate rows", chain, removed);
    }
    Ok(table)
}

/// Builds the tables for every configured chain. Any failure aborts the whole build.
pub fn build_dataset(root: &Path) -> Result<Dataset> {
    let rates = load_interest_rates(&root.join(INTEREST_RATES_PATH))
        .context("Failed to load shared interest rates")?;

    let mut dataset = Dataset::new();
    for chain in ChainId::iter() {
        let table = build_chain_table(root, chain, &rates)
            .with_context(|| format!("Failed to build dataset for {}", chain))?;
        dataset.insert(table);
    }

    log::info!("Dataset ready: {} chains from {:?}", dataset.len(), root);
    Ok(dataset)
}
