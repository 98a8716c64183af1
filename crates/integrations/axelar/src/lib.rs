//! Axelar Bridge Source-Chain Configuration
//!
//! Assets bridged into Osmosis through Axelar can be sourced from several EVM
//! chains. This crate holds the static side of that integration: the source
//! chain identifiers, the per-network tables that map Axelar and EVM client
//! chain ids onto them, and the per-asset bridge configs.
//!
//! Everything here is plain configuration data, built once at startup and
//! read-only afterwards.

pub mod chain;
pub mod chain_map;
pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod validate;

pub use chain::SourceChain;
pub use chain_map::{ChainIdKind, ChainIdMap, ChainTables};
pub use config::{AxelarBridgeConfig, BridgeMethod, IbcConfig, SourceChainConfig};
pub use error::BridgeError;
pub use registry::{BridgeAsset, BridgeRegistry};
pub use validate::validate_erc20_address;
