//! Application state shared across API handlers
//!
//! Passed explicitly to every handler through axum's `State` extractor. The
//! config and bridge tables are built once at startup and never change
//! afterwards.

use std::sync::Arc;

use axelar::{BridgeError, BridgeRegistry, ChainTables};
use osmoweb_core::{AppConfig, InfiniteQuery, Network, QueryError};
use thiserror::Error;

/// Errors that can occur while building the application state
#[derive(Debug, Error)]
pub enum StateError {
    /// Config failed validation
    #[error("Invalid config: {0}")]
    Config(#[from] osmoweb_core::Error),

    /// Bridge registry could not be loaded
    #[error("Bridge registry error: {0}")]
    Bridge(#[from] BridgeError),

    /// Registry was built for another network than the config selects
    #[error("Bridge registry is for {registry}, config selects {config}")]
    NetworkMismatch { registry: Network, config: Network },
}

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: AppConfig,
    chains: ChainTables,
    registry: BridgeRegistry,
}

impl AppState {
    /// Build state from already-loaded parts
    pub fn new(
        config: AppConfig,
        chains: ChainTables,
        registry: BridgeRegistry,
    ) -> Result<Self, StateError> {
        config.validate()?;
        if registry.network() != config.network {
            return Err(StateError::NetworkMismatch {
                registry: registry.network(),
                config: config.network,
            });
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                chains,
                registry,
            }),
        })
    }

    /// Load chain tables and the bridge registry for `config`.
    ///
    /// Uses `bridge_registry_path` when set, the built-in registry otherwise.
    pub fn with_config(config: AppConfig) -> Result<Self, StateError> {
        let chains = ChainTables::load(config.network);
        let registry = match &config.bridge_registry_path {
            Some(path) => BridgeRegistry::load(path, &chains)?,
            None => {
                let registry = BridgeRegistry::builtin(&chains)?;
                tracing::info!(
                    network = %config.network,
                    assets = registry.len(),
                    "Using built-in bridge registry"
                );
                registry
            }
        };
        Self::new(config, chains, registry)
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn network(&self) -> Network {
        self.inner.config.network
    }

    /// Largest page size clients may request
    pub fn max_page_limit(&self) -> i64 {
        self.inner.config.pagination.max_limit
    }

    /// Validate an incoming infinite query against the configured bounds
    pub fn check_query(&self, query: &InfiniteQuery) -> Result<(), QueryError> {
        query.validate_with_max(self.max_page_limit())
    }

    pub fn chains(&self) -> &ChainTables {
        &self.inner.chains
    }

    pub fn registry(&self) -> &BridgeRegistry {
        &self.inner.registry
    }
}
