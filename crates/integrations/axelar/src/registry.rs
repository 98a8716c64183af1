//! Registry of Axelar-bridged assets
//!
//! Loaded from a JSON object keyed by denom:
//!
//! ```json
//! { "uusdc": { "method": "deposit-address", "sourceChains": [ ... ] } }
//! ```
//!
//! Assets are kept sorted by denom so the ordering is stable across cursor
//! pagination calls.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use osmoweb_core::{Denom, Network};
use serde::{Deserialize, Serialize};

use crate::chain_map::ChainTables;
use crate::config::AxelarBridgeConfig;
use crate::constants::{BUILTIN_REGISTRY_MAINNET, BUILTIN_REGISTRY_TESTNET};
use crate::error::BridgeError;
use crate::validate::validate_erc20_address;

/// A bridged asset together with its config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeAsset {
    pub denom: Denom,
    #[serde(flatten)]
    pub config: AxelarBridgeConfig,
}

/// Immutable, validated set of bridge configs for one network
#[derive(Debug, Clone)]
pub struct BridgeRegistry {
    network: Network,
    assets: Vec<BridgeAsset>,
}

impl BridgeRegistry {
    /// Parse and validate a registry document
    pub fn from_json(json: &str, tables: &ChainTables) -> Result<Self, BridgeError> {
        let raw: BTreeMap<Denom, AxelarBridgeConfig> = serde_json::from_str(json)?;

        let assets: Vec<BridgeAsset> = raw
            .into_iter()
            .map(|(denom, config)| BridgeAsset { denom, config })
            .collect();

        for asset in &assets {
            validate_asset(asset, tables)?;
        }

        Ok(Self {
            network: tables.network(),
            assets,
        })
    }

    /// Read and validate a registry file
    pub fn load(path: impl AsRef<Path>, tables: &ChainTables) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BridgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_json(&json, tables)?;
        tracing::info!(
            path = %path.display(),
            network = %registry.network,
            assets = registry.len(),
            "Loaded bridge registry"
        );
        Ok(registry)
    }

    /// Registry compiled into the binary for the tables' network
    pub fn builtin(tables: &ChainTables) -> Result<Self, BridgeError> {
        let json = match tables.network() {
            Network::Mainnet => BUILTIN_REGISTRY_MAINNET,
            Network::Testnet => BUILTIN_REGISTRY_TESTNET,
        };
        Self::from_json(json, tables)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// All assets, ordered by denom
    pub fn assets(&self) -> &[BridgeAsset] {
        &self.assets
    }

    pub fn get(&self, denom: &str) -> Option<&BridgeAsset> {
        self.assets
            .binary_search_by(|asset| asset.denom.as_str().cmp(denom))
            .ok()
            .map(|index| &self.assets[index])
    }

    /// Like [`get`](Self::get), but with an error for unknown denoms
    pub fn require(&self, denom: &str) -> Result<&BridgeAsset, BridgeError> {
        self.get(denom).ok_or_else(|| BridgeError::AssetNotFound {
            denom: denom.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

fn validate_asset(asset: &BridgeAsset, tables: &ChainTables) -> Result<(), BridgeError> {
    let denom = asset.denom.as_str();
    let config = &asset.config;

    if config.source_chains.is_empty() {
        return Err(BridgeError::EmptySourceChains {
            denom: denom.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for source in &config.source_chains {
        if !seen.insert(source.id) {
            return Err(BridgeError::DuplicateSourceChain {
                denom: denom.to_string(),
                chain: source.id,
            });
        }

        if !tables.supports(source.id) {
            return Err(BridgeError::UnsupportedOnNetwork {
                denom: denom.to_string(),
                chain: source.id,
                network: tables.network(),
            });
        }

        if let Some(address) = &source.erc20_contract_address {
            validate_erc20_address(address).map_err(|reason| {
                BridgeError::InvalidErc20Address {
                    denom: denom.to_string(),
                    chain: source.id,
                    reason,
                }
            })?;
        }
    }

    if let Some(default) = config.default_source_chain_id {
        if config.source_chain(default).is_none() {
            return Err(BridgeError::DefaultNotListed {
                denom: denom.to_string(),
                chain: default,
            });
        }
    }

    Ok(())
}
