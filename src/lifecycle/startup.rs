//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Compile the navigation table
//! - Start the metrics exporter when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener starts last (traffic only when ready)

use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, ApiConfig, ConfigError, ConsoleConfig, NavigationConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::navigation::RouteTable;
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Load the config file, or fall back to defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<ConsoleConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ConsoleConfig::default()),
    }
}

/// Backend settings for one-shot CLI calls.
///
/// Reads the `[api]` section of the config file (defaults without one) and
/// applies `base_url` on top when given.
pub fn api_config(path: Option<&Path>, base_url: Option<String>) -> Result<ApiConfig, ConfigError> {
    let mut api = load_or_default(path)?.api;
    if let Some(base_url) = base_url {
        api.base_url = base_url;
    }
    Ok(api)
}

/// Compile the configured table: the custom one if present, else the preset.
pub fn build_route_table(config: &NavigationConfig) -> Result<RouteTable, ConfigError> {
    match &config.table {
        Some(table) => RouteTable::from_config(table).map_err(ConfigError::Validation),
        None => Ok(RouteTable::for_variant(config.variant)),
    }
}

/// Bring up every subsystem and serve until `shutdown` fires.
pub async fn run(config: ConsoleConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let table = build_route_table(&config.navigation)?;
    tracing::info!(
        table = table.name(),
        sections = table.sections().len(),
        "Navigation table compiled"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let server = HttpServer::new(config, table);
    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
