use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of chains the dashboard knows about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ChainId {
    #[default]
    Algorand,
    Aptos,
    Cardano,
    #[strum(to_string = "ICP")]
    Icp,
    #[strum(to_string = "NEAR")]
    Near,
    Solana,
    Sui,
    Tezos,
}

impl ChainId {
    /// Lowercase stem shared by the TVL, stablecoin and staking files.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Algorand => "algorand",
            Self::Aptos => "aptos",
            Self::Cardano => "cardano",
            Self::Icp => "icp",
            Self::Near => "near",
            Self::Solana => "solana",
            Self::Sui => "sui",
            Self::Tezos => "tezos",
        }
    }

    /// Native token ticker, as used by the price exports.
    pub fn token_symbol(&self) -> &'static str {
        match self {
            Self::Algorand => "algo",
            Self::Aptos => "apt",
            Self::Cardano => "ada",
            Self::Icp => "icp",
            Self::Near => "near",
            Self::Solana => "sol",
            Self::Sui => "sui",
            Self::Tezos => "xtz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_names_match_dashboard_labels() {
        let names: Vec<String> = ChainId::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec!["Algorand", "Aptos", "Cardano", "ICP", "NEAR", "Solana", "Sui", "Tezos"]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ChainId::from_str("near").unwrap(), ChainId::Near);
        assert_eq!(ChainId::from_str("Icp").unwrap(), ChainId::Icp);
        assert!(ChainId::from_str("ethereum").is_err());
    }
}
