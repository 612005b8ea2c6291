//! Input file layout, one record per chain.

use std::path::{Path, PathBuf};

use crate::domain::ChainId;

/// Paths (relative to the data root) of every file feeding one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSources {
    pub chain: ChainId,
    pub tvl: &'static str,
    pub price: &'static str,
    pub stables: &'static str,
    pub staking: &'static str,
}

impl ChainSources {
    /// Exhaustive over `ChainId`.
    pub const fn for_chain(chain: ChainId) -> Self {
        match chain {
            ChainId::Algorand => Self {
                chain,
                tvl: "data/algorand.csv",
                price: "price/algo_usd.csv",
                stables: "stablecoins/algorand.csv",
                staking: "staking/algorand.json",
            },
            ChainId::Aptos => Self {
                chain,
                tvl: "data/aptos.csv",
                price: "price/apt_usd.csv",
                stables: "stablecoins/aptos.csv",
                staking: "staking/aptos.json",
            },
            ChainId::Cardano => Self {
                chain,
                tvl: "data/cardano.csv",
                price: "price/ada_usd.csv",
                stables: "stablecoins/cardano.csv",
                staking: "staking/cardano.json",
            },
            ChainId::Icp => Self {
                chain,
                tvl: "data/icp.csv",
                price: "price/icp_usd.csv",
                stables: "stablecoins/icp.csv",
                staking: "staking/icp.json",
            },
            ChainId::Near => Self {
                chain,
                tvl: "data/near.csv",
                price: "price/near_usd.csv",
                stables: "stablecoins/near.csv",
                staking: "staking/near.json",
            },
            ChainId::Solana => Self {
                chain,
                tvl: "data/solana.csv",
                price: "price/sol_usd.csv",
                stables: "stablecoins/solana.csv",
                staking: "staking/solana.json",
            },
            ChainId::Sui => Self {
                chain,
                tvl: "data/sui.csv",
                price: "price/sui_usd.csv",
                stables: "stablecoins/sui.csv",
                staking: "staking/sui.json",
            },
            ChainId::Tezos => Self {
                chain,
                tvl: "data/tezos.csv",
                price: "price/xtz_usd.csv",
                stables: "stablecoins/tezos.csv",
                staking: "staking/tezos.json",
            },
        }
    }

    pub fn tvl_path(&self, root: &Path) -> PathBuf {
        root.join(self.tvl)
    }

    pub fn price_path(&self, root: &Path) -> PathBuf {
        root.join(self.price)
    }

    pub fn stables_path(&self, root: &Path) -> PathBuf {
        root.join(self.stables)
    }

    pub fn staking_path(&self, root: &Path) -> PathBuf {
        root.join(self.staking)
    }
}

/// Shared macro series. Directory name as shipped with the data bundle.
pub const INTEREST_RATES_PATH: &str = "inlfation/interest_rates.csv";

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_chain_has_its_own_sources() {
        for chain in ChainId::iter() {
            let sources = ChainSources::for_chain(chain);
            assert_eq!(sources.chain, chain);
            assert!(sources.tvl.contains(chain.file_stem()));
            assert!(sources.stables.contains(chain.file_stem()));
            assert!(sources.staking.contains(chain.file_stem()));
            assert!(sources.price.contains(chain.token_symbol()));
        }
    }
}
