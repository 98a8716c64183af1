//! osmoweb query server

use anyhow::Context;
use osmoweb_api::AppState;
use osmoweb_core::AppConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVES: &str = "osmoweb=debug,axelar=debug,info";

/// Install the global tracing subscriber.
///
/// A non-empty `RUST_LOG` replaces the defaults entirely. Without it osmoweb
/// crates log at debug and everything else at info.
pub fn init_tracing() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(log_directives(rust_log.as_deref()))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn log_directives(rust_log: Option<&str>) -> &str {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => DEFAULT_LOG_DIRECTIVES,
    }
}

/// Load configuration and bridge tables, then serve until Ctrl-C
pub async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        network = %config.network,
        port = config.api_port,
        registry = ?config.bridge_registry_path,
        "Starting osmoweb"
    );

    let state = AppState::with_config(config).context("Failed to load bridge tables")?;
    osmoweb_api::start_server(state)
        .await
        .context("Query server failed")?;

    Ok(())
}
