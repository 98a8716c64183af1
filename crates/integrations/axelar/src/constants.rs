//! Axelar chain id tables
//!
//! Axelar chain ids are the names Axelar's APIs accept as chain arguments.
//! EVM client chain ids are the network names EVM wallets use when a network
//! is added. Both sides map onto [`SourceChain`].
//!
//! Mainnet: <https://docs.axelar.dev/dev/build/chain-names/mainnet>
//! Testnet: <https://docs.axelar.dev/dev/build/chain-names/testnet>

use crate::chain::SourceChain;

/// Axelar chain id => source chain (mainnet)
pub const AXELAR_CHAIN_IDS_MAINNET: &[(&str, SourceChain)] = &[
    ("Avalanche", SourceChain::Avalanche),
    ("binance", SourceChain::Binance),
    ("Ethereum", SourceChain::Ethereum),
    ("Fantom", SourceChain::Fantom),
    ("Moonbeam", SourceChain::Moonbeam),
    ("Polygon", SourceChain::Polygon),
];

/// Axelar chain id => source chain (testnet)
pub const AXELAR_CHAIN_IDS_TESTNET: &[(&str, SourceChain)] = &[
    ("aurora", SourceChain::Aurora),
    ("Avalanche", SourceChain::Avalanche),
    ("binance", SourceChain::Binance),
    ("ethereum-2", SourceChain::Ethereum),
    ("Fantom", SourceChain::Fantom),
    ("Moonbeam", SourceChain::Moonbeam),
    ("Polygon", SourceChain::Polygon),
];

/// EVM client chain name => source chain (mainnet)
pub const EVM_CLIENT_CHAIN_IDS_MAINNET: &[(&str, SourceChain)] = &[
    ("Avalanche C-Chain", SourceChain::Avalanche),
    ("Binance Smart Chain Mainnet", SourceChain::Binance),
    ("Ethereum Main Network", SourceChain::Ethereum),
    ("Fantom Opera", SourceChain::Fantom),
    ("Moonbeam Mainnet", SourceChain::Moonbeam),
    ("Polygon Mainnet", SourceChain::Polygon),
];

/// EVM client chain name => source chain (testnet)
pub const EVM_CLIENT_CHAIN_IDS_TESTNET: &[(&str, SourceChain)] = &[
    ("Aurora Testnet", SourceChain::Aurora),
    ("Avalanche Fuji Testnet", SourceChain::Avalanche),
    ("Binance Smart Chain Testnet", SourceChain::Binance),
    ("Goerli Test Network", SourceChain::Ethereum),
    ("Fantom Testnet", SourceChain::Fantom),
    ("Moonbase Alpha", SourceChain::Moonbeam),
    ("Mumbai", SourceChain::Polygon),
];

/// Built-in bridge registry shipped for mainnet
pub const BUILTIN_REGISTRY_MAINNET: &str = include_str!("../data/registry-mainnet.json");

/// Built-in bridge registry shipped for testnet
pub const BUILTIN_REGISTRY_TESTNET: &str = include_str!("../data/registry-testnet.json");
