//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the console.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::routes::RouteTableConfig;

/// Root configuration for the gateway console.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Listener configuration (bind address, static assets).
    pub listener: ListenerConfig,

    /// Navigation table selection.
    pub navigation: NavigationConfig,

    /// Device API client settings.
    pub api: ApiConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3001").
    pub bind_address: String,

    /// Directory holding the built single-page app.
    /// When set, unknown paths fall back to its `index.html`.
    pub dist_dir: Option<String>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3001".to_string(),
            dist_dir: None,
        }
    }
}

/// Which UI variant the console serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    /// Served locally on the gateway.
    #[default]
    Embedded,
    /// Gateway UI nested under `/device/{id}` in the multi-device console.
    Web,
    /// Central cloud platform.
    Cloud,
}

/// Navigation table selection.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NavigationConfig {
    /// Built-in table to use when no custom table is given.
    pub variant: NavVariant,

    /// Custom route table; replaces the built-in one when present.
    pub table: Option<RouteTableConfig>,
}

/// Device API client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the gateway backend (e.g., "http://127.0.0.1:9000").
    pub base_url: String,

    /// Optional request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,

    /// Artificial delay of the simulated submission endpoints, in milliseconds.
    pub simulated_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000".to_string(),
            timeout_secs: None,
            simulated_delay_ms: 1000,
        }
    }
}

/// Timeout configuration for the HTTP service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON instead of the human-readable format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9091".to_string(),
        }
    }
}
