//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs (navigation JSON) | static files with index fallback
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::MakeRequestUuidV4;
pub use server::{AppState, HttpServer};
