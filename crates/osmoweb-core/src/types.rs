//! Core type definitions for osmoweb

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    /// Map the `IS_TESTNET` style flag onto a network.
    ///
    /// `"true"` selects testnet and `"false"` mainnet. Anything else is not a
    /// network choice.
    pub fn from_testnet_flag(flag: &str) -> Option<Self> {
        match flag {
            "true" => Some(Self::Testnet),
            "false" => Some(Self::Mainnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}

/// Asset denomination (e.g. `uusdc`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denom(pub String);

impl Denom {
    pub fn new(denom: impl Into<String>) -> Self {
        Self(denom.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Environment variables read at startup
pub mod env {
    /// Path of the JSON config file
    pub const CONFIG_PATH: &str = "OSMOWEB_CONFIG";

    /// `"true"` or `"false"`; overrides the config file's network
    pub const IS_TESTNET: &str = "OSMOWEB_IS_TESTNET";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Mainnet.as_str(), "mainnet");
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }

    #[test]
    fn test_network_from_testnet_flag() {
        assert_eq!(Network::from_testnet_flag("true"), Some(Network::Testnet));
        assert_eq!(Network::from_testnet_flag("false"), Some(Network::Mainnet));
        assert_eq!(Network::from_testnet_flag("TRUE"), None);
        assert_eq!(Network::from_testnet_flag("1"), None);
        assert_eq!(Network::from_testnet_flag(""), None);
    }

    #[test]
    fn test_network_parse() {
        assert_eq!("testnet".parse::<Network>(), Ok(Network::Testnet));
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_denom_ordering() {
        let mut denoms = vec![Denom::new("wbtc"), Denom::new("uusdc"), Denom::new("dai")];
        denoms.sort();
        assert_eq!(denoms[0].as_str(), "dai");
        assert_eq!(denoms[2].to_string(), "wbtc");
    }
}
