//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Compile route table → Start listener
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger → server stops accepting → drain → exit
//! ```

pub mod signals;
pub mod startup;

pub use signals::Shutdown;
