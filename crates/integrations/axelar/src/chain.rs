//! Intermediate source chain identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BridgeError;

/// EVM chain an Axelar-bridged asset can be sourced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceChain {
    Aurora,
    Avalanche,
    Binance,
    Ethereum,
    Fantom,
    Moonbeam,
    Polygon,
}

impl SourceChain {
    pub const ALL: [SourceChain; 7] = [
        Self::Aurora,
        Self::Avalanche,
        Self::Binance,
        Self::Ethereum,
        Self::Fantom,
        Self::Moonbeam,
        Self::Polygon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aurora => "aurora",
            Self::Avalanche => "avalanche",
            Self::Binance => "binance",
            Self::Ethereum => "ethereum",
            Self::Fantom => "fantom",
            Self::Moonbeam => "moonbeam",
            Self::Polygon => "polygon",
        }
    }

    /// Display name for each chain
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aurora => "Aurora",
            Self::Avalanche => "Avalanche",
            Self::Binance => "BNB Chain",
            Self::Ethereum => "Ethereum",
            Self::Fantom => "Fantom",
            Self::Moonbeam => "Moonbeam",
            Self::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for SourceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceChain {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownSourceChain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for chain in SourceChain::ALL {
            assert_eq!(chain.to_string().parse::<SourceChain>().unwrap(), chain);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Ethereum".parse::<SourceChain>().is_err());
        assert!("solana".parse::<SourceChain>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SourceChain::Moonbeam).unwrap();
        assert_eq!(json, "\"moonbeam\"");
        let chain: SourceChain = serde_json::from_str("\"polygon\"").unwrap();
        assert_eq!(chain, SourceChain::Polygon);
    }
}
