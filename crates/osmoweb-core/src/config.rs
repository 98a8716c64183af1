//! Configuration types for osmoweb

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::query::MAX_PAGE_LIMIT;
use crate::types::env;
use crate::Network;

/// Bounds applied to incoming infinite queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Largest `limit` a client may request
    #[serde(default = "default_max_limit")]
    pub max_limit: i64,
}

fn default_max_limit() -> i64 {
    MAX_PAGE_LIMIT
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Network (mainnet or testnet)
    #[serde(default)]
    pub network: Network,

    /// Address the query server binds to
    #[serde(default = "default_api_host")]
    pub api_host: IpAddr,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Infinite-query bounds
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// JSON file with Axelar bridge configs keyed by denom.
    /// The built-in registry is used when unset.
    #[serde(default)]
    pub bridge_registry_path: Option<PathBuf>,
}

fn default_api_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_api_port() -> u16 {
    19080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            api_host: default_api_host(),
            api_port: default_api_port(),
            pagination: PaginationConfig::default(),
            bridge_registry_path: None,
        }
    }
}

impl AppConfig {
    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), network = %config.network, "Loaded config");
        Ok(config)
    }

    /// Load config from `OSMOWEB_CONFIG` (or defaults) and apply
    /// `OSMOWEB_IS_TESTNET`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(env::CONFIG_PATH).ok().as_deref(),
            std::env::var(env::IS_TESTNET).ok().as_deref(),
        )
    }

    fn from_vars(config_path: Option<&str>, testnet_flag: Option<&str>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_testnet_flag(testnet_flag);
        Ok(config)
    }

    /// Override the network when the testnet flag is `"true"` or `"false"`.
    /// Other values leave the configured network untouched.
    pub fn apply_testnet_flag(&mut self, flag: Option<&str>) {
        let Some(flag) = flag else {
            return;
        };
        match Network::from_testnet_flag(flag) {
            Some(network) => self.network = network,
            None => tracing::warn!(
                flag,
                network = %self.network,
                "Ignoring {} value, expected \"true\" or \"false\"",
                env::IS_TESTNET
            ),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pagination.max_limit < 1 {
            return Err(Error::Config(format!(
                "pagination.max_limit must be positive, got {}",
                self.pagination.max_limit
            )));
        }
        Ok(())
    }
}
