//! Chain id lookup tables
//!
//! Built once per network at startup from the tables in [`crate::constants`].

use std::collections::BTreeMap;
use std::fmt;

use osmoweb_core::Network;
use serde::{Deserialize, Serialize};

use crate::chain::SourceChain;
use crate::constants::{
    AXELAR_CHAIN_IDS_MAINNET, AXELAR_CHAIN_IDS_TESTNET, EVM_CLIENT_CHAIN_IDS_MAINNET,
    EVM_CLIENT_CHAIN_IDS_TESTNET,
};
use crate::error::BridgeError;

/// Which naming scheme a chain id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainIdKind {
    /// Chain names accepted by Axelar's APIs
    Axelar,
    /// Network names used by EVM wallets
    EvmClient,
}

impl fmt::Display for ChainIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axelar => write!(f, "axelar"),
            Self::EvmClient => write!(f, "evm-client"),
        }
    }
}

/// Immutable chain id => source chain table for one network
#[derive(Debug, Clone)]
pub struct ChainIdMap {
    kind: ChainIdKind,
    network: Network,
    entries: BTreeMap<&'static str, SourceChain>,
}

impl ChainIdMap {
    /// Build the table for `kind` on `network`
    pub fn new(kind: ChainIdKind, network: Network) -> Self {
        let table = match (kind, network) {
            (ChainIdKind::Axelar, Network::Mainnet) => AXELAR_CHAIN_IDS_MAINNET,
            (ChainIdKind::Axelar, Network::Testnet) => AXELAR_CHAIN_IDS_TESTNET,
            (ChainIdKind::EvmClient, Network::Mainnet) => EVM_CLIENT_CHAIN_IDS_MAINNET,
            (ChainIdKind::EvmClient, Network::Testnet) => EVM_CLIENT_CHAIN_IDS_TESTNET,
        };

        Self {
            kind,
            network,
            entries: table.iter().copied().collect(),
        }
    }

    pub fn axelar(network: Network) -> Self {
        Self::new(ChainIdKind::Axelar, network)
    }

    pub fn evm_client(network: Network) -> Self {
        Self::new(ChainIdKind::EvmClient, network)
    }

    pub fn kind(&self) -> ChainIdKind {
        self.kind
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Look up a chain id (exact, case-sensitive match)
    pub fn get(&self, chain_id: &str) -> Option<SourceChain> {
        self.entries.get(chain_id).copied()
    }

    /// Like [`get`](Self::get), but with an error naming the table
    pub fn resolve(&self, chain_id: &str) -> Result<SourceChain, BridgeError> {
        self.get(chain_id).ok_or_else(|| BridgeError::UnknownChainId {
            kind: self.kind,
            id: chain_id.to_string(),
        })
    }

    /// Reverse lookup: the chain id this table uses for `chain`
    pub fn chain_id_for(&self, chain: SourceChain) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| **c == chain)
            .map(|(id, _)| *id)
    }

    /// Entries ordered by chain id
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, SourceChain)> + '_ {
        self.entries.iter().map(|(id, chain)| (*id, *chain))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both chain id tables for the configured network
#[derive(Debug, Clone)]
pub struct ChainTables {
    pub axelar: ChainIdMap,
    pub evm_client: ChainIdMap,
}

impl ChainTables {
    pub fn load(network: Network) -> Self {
        let tables = Self {
            axelar: ChainIdMap::axelar(network),
            evm_client: ChainIdMap::evm_client(network),
        };
        tracing::debug!(
            %network,
            axelar = tables.axelar.len(),
            evm_client = tables.evm_client.len(),
            "Loaded chain id tables"
        );
        tables
    }

    pub fn network(&self) -> Network {
        self.axelar.network()
    }

    /// Whether both tables know `chain` on this network
    pub fn supports(&self, chain: SourceChain) -> bool {
        self.axelar.chain_id_for(chain).is_some()
            && self.evm_client.chain_id_for(chain).is_some()
    }

    pub fn get(&self, kind: ChainIdKind) -> &ChainIdMap {
        match kind {
            ChainIdKind::Axelar => &self.axelar,
            ChainIdKind::EvmClient => &self.evm_client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_axelar_ids() {
        let map = ChainIdMap::axelar(Network::Mainnet);
        assert_eq!(map.get("Ethereum"), Some(SourceChain::Ethereum));
        assert_eq!(map.get("binance"), Some(SourceChain::Binance));
        assert_eq!(map.get("ethereum-2"), None);
        assert_eq!(map.get("aurora"), None);
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_testnet_axelar_ids() {
        let map = ChainIdMap::axelar(Network::Testnet);
        assert_eq!(map.get("ethereum-2"), Some(SourceChain::Ethereum));
        assert_eq!(map.get("aurora"), Some(SourceChain::Aurora));
        assert_eq!(map.get("Ethereum"), None);
        assert_eq!(map.len(), 7);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = ChainIdMap::axelar(Network::Mainnet);
        assert_eq!(map.get("avalanche"), None);
        assert_eq!(map.get("Avalanche"), Some(SourceChain::Avalanche));
    }

    #[test]
    fn test_evm_client_ids() {
        let mainnet = ChainIdMap::evm_client(Network::Mainnet);
        assert_eq!(
            mainnet.get("Ethereum Main Network"),
            Some(SourceChain::Ethereum)
        );
        assert_eq!(mainnet.get("Polygon Mainnet"), Some(SourceChain::Polygon));

        let testnet = ChainIdMap::evm_client(Network::Testnet);
        assert_eq!(testnet.get("Mumbai"), Some(SourceChain::Polygon));
        assert_eq!(testnet.get("Moonbase Alpha"), Some(SourceChain::Moonbeam));
        assert_eq!(testnet.get("Polygon Mainnet"), None);
    }

    #[test]
    fn test_reverse_lookup() {
        let map = ChainIdMap::axelar(Network::Testnet);
        assert_eq!(map.chain_id_for(SourceChain::Ethereum), Some("ethereum-2"));

        let map = ChainIdMap::axelar(Network::Mainnet);
        assert_eq!(map.chain_id_for(SourceChain::Aurora), None);
    }

    #[test]
    fn test_resolve_error_names_table() {
        let map = ChainIdMap::evm_client(Network::Mainnet);
        let err = map.resolve("Goerli Test Network").unwrap_err();
        assert!(matches!(
            err,
            BridgeError::UnknownChainId {
                kind: ChainIdKind::EvmClient,
                ..
            }
        ));
    }

    #[test]
    fn test_iteration_is_ordered() {
        let map = ChainIdMap::axelar(Network::Mainnet);
        let ids: Vec<&str> = map.iter().map(|(id, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_tables_support() {
        let mainnet = ChainTables::load(Network::Mainnet);
        assert!(mainnet.supports(SourceChain::Ethereum));
        assert!(!mainnet.supports(SourceChain::Aurora));

        let testnet = ChainTables::load(Network::Testnet);
        assert!(SourceChain::ALL.iter().all(|c| testnet.supports(*c)));
        assert_eq!(testnet.network(), Network::Testnet);
    }
}
