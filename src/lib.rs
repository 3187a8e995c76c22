//! Gateway console library.
//!
//! Navigation resolution for the device-management dashboard, the thin
//! device API client, and the HTTP service that serves both.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;

pub use config::schema::ConsoleConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use navigation::{ResolvedNav, RouteTable};
