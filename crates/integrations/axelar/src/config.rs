//! Per-asset Axelar bridge configuration

use serde::{Deserialize, Serialize};

use crate::chain::SourceChain;

/// How a transfer reaches Axelar.
///
/// Only deposit addresses exist today; gateway contract calls may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BridgeMethod {
    #[default]
    DepositAddress,
}

/// IBC channels for CosmosCounterparty <-> Axelar <-> Osmosis transfers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbcConfig {
    /// Channel on the cosmos counterparty
    pub source_channel_id: String,
    /// Channel on Axelar
    pub dest_channel_id: String,
}

/// One chain an asset can be sourced from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceChainConfig {
    pub id: SourceChain,

    /// Origin ERC20 token on that chain. `None` prefers the chain's native
    /// currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erc20_contract_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibc_config: Option<IbcConfig>,

    pub logo_url: String,

    /// Axelar transfer fee in origin currency base units
    pub transfer_fee_min_amount: String,

    pub pretty_name: String,
}

/// Bridge configuration of one Axelar asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxelarBridgeConfig {
    #[serde(default)]
    pub method: BridgeMethod,

    /// Chains that can fungibly source this asset
    pub source_chains: Vec<SourceChainConfig>,

    /// Preselected source chain; the first entry of `source_chains` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_source_chain_id: Option<SourceChain>,
}

impl AxelarBridgeConfig {
    /// The source chain to preselect
    pub fn default_source_chain(&self) -> Option<&SourceChainConfig> {
        match self.default_source_chain_id {
            Some(id) => self.source_chain(id),
            None => self.source_chains.first(),
        }
    }

    pub fn source_chain(&self, id: SourceChain) -> Option<&SourceChainConfig> {
        self.source_chains.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(id: SourceChain) -> SourceChainConfig {
        SourceChainConfig {
            id,
            erc20_contract_address: None,
            ibc_config: None,
            logo_url: format!("/networks/{}.svg", id),
            transfer_fee_min_amount: "0".to_string(),
            pretty_name: id.display_name().to_string(),
        }
    }

    #[test]
    fn test_default_source_chain_falls_back_to_first() {
        let config = AxelarBridgeConfig {
            method: BridgeMethod::DepositAddress,
            source_chains: vec![chain(SourceChain::Polygon), chain(SourceChain::Ethereum)],
            default_source_chain_id: None,
        };
        assert_eq!(
            config.default_source_chain().map(|c| c.id),
            Some(SourceChain::Polygon)
        );

        let config = AxelarBridgeConfig {
            default_source_chain_id: Some(SourceChain::Ethereum),
            ..config
        };
        assert_eq!(
            config.default_source_chain().map(|c| c.id),
            Some(SourceChain::Ethereum)
        );
    }

    #[test]
    fn test_parse_camel_case_json() {
        let json = r#"{
            "method": "deposit-address",
            "sourceChains": [{
                "id": "ethereum",
                "erc20ContractAddress": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
                "logoUrl": "/networks/ethereum.svg",
                "transferFeeMinAmount": "20000000",
                "prettyName": "Ethereum"
            }, {
                "id": "moonbeam",
                "ibcConfig": {"sourceChannelId": "channel-1", "destChannelId": "channel-2"},
                "logoUrl": "/networks/moonbeam.svg",
                "transferFeeMinAmount": "1500000",
                "prettyName": "Moonbeam"
            }]
        }"#;

        let config: AxelarBridgeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.method, BridgeMethod::DepositAddress);
        assert_eq!(config.source_chains.len(), 2);
        assert!(config.source_chains[0].erc20_contract_address.is_some());
        assert!(config.source_chains[1].erc20_contract_address.is_none());
        assert_eq!(
            config.source_chains[1]
                .ibc_config
                .as_ref()
                .map(|c| c.dest_channel_id.as_str()),
            Some("channel-2")
        );
        assert!(config.default_source_chain_id.is_none());
    }
}
