//! Device API subsystem.
//!
//! # Data Flow
//! ```text
//! UI action (list, update, delete, bind parameters)
//!     → client.rs (GET/PATCH/POST/DELETE /api/...)
//!     → 2xx: Ok(body) | non-2xx: ApiError::Status | network or body: ApiError::Transport
//!
//! UI action (add model / device / parameter)
//!     → simulated.rs (fixed delay, always succeeds)
//! ```
//!
//! # Design Decisions
//! - Errors are logged at the call site and propagated, never swallowed
//! - No retries, no backoff
//! - Timeout is opt-in through configuration

pub mod client;
pub mod error;
pub mod simulated;
pub mod types;

pub use client::DeviceClient;
pub use error::{ApiError, ApiResult};
pub use simulated::{SimulatedApi, Submission, SubmissionKind};
pub use types::{
    DeviceData, DeviceParameter, DeviceUpdate, ModbusConfig, ModelData, ParameterData,
    ParameterLink, Scalar,
};
