//! Error types for the Axelar bridge configuration

use osmoweb_core::Network;
use thiserror::Error;

use crate::chain::SourceChain;
use crate::chain_map::ChainIdKind;

/// Errors raised while loading or querying bridge configuration
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Unknown source chain: {0}")]
    UnknownSourceChain(String),

    #[error("Unknown {kind} chain id: {id}")]
    UnknownChainId { kind: ChainIdKind, id: String },

    #[error("Bridge asset not found: {denom}")]
    AssetNotFound { denom: String },

    #[error("Bridge asset {denom} has no source chains")]
    EmptySourceChains { denom: String },

    #[error("Bridge asset {denom} lists {chain} more than once")]
    DuplicateSourceChain { denom: String, chain: SourceChain },

    #[error("Default source chain {chain} of {denom} is not in its source chains")]
    DefaultNotListed { denom: String, chain: SourceChain },

    #[error("Source chain {chain} of {denom} is not available on {network}")]
    UnsupportedOnNetwork {
        denom: String,
        chain: SourceChain,
        network: Network,
    },

    #[error("Invalid ERC20 address for {denom} on {chain}: {reason}")]
    InvalidErc20Address {
        denom: String,
        chain: SourceChain,
        reason: String,
    },

    #[error("Failed to parse bridge registry: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read bridge registry {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BridgeError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSourceChain(_) => "unknown_source_chain",
            Self::UnknownChainId { .. } => "unknown_chain_id",
            Self::AssetNotFound { .. } => "asset_not_found",
            Self::EmptySourceChains { .. }
            | Self::DuplicateSourceChain { .. }
            | Self::DefaultNotListed { .. }
            | Self::UnsupportedOnNetwork { .. }
            | Self::InvalidErc20Address { .. } => "invalid_bridge_config",
            Self::Parse(_) | Self::Io { .. } => "bridge_config_unavailable",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnknownSourceChain(_) => 400,
            Self::UnknownChainId { .. } | Self::AssetNotFound { .. } => 404,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = BridgeError::UnknownChainId {
            kind: ChainIdKind::Axelar,
            id: "solana".into(),
        };
        assert_eq!(err.error_code(), "unknown_chain_id");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Unknown axelar chain id: solana");

        let err = BridgeError::DefaultNotListed {
            denom: "uusdc".into(),
            chain: SourceChain::Fantom,
        };
        assert_eq!(err.error_code(), "invalid_bridge_config");
        assert_eq!(err.status_code(), 500);
    }
}
