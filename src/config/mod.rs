//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ConsoleConfig (validated, immutable)
//!     → navigation table compiled once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod routes;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use routes::{ItemConfig, PathPattern, RouteTableConfig, SectionConfig, SectionRule};
pub use schema::{ApiConfig, ConsoleConfig, ListenerConfig, NavVariant, NavigationConfig, ObservabilityConfig};
