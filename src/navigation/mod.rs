//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Current pathname (+ optional device id)
//!     → scope.rs (strip /device/{id}, normalize empty path)
//!     → resolver.rs (section rules, item lookup, breadcrumb)
//!     → matcher.rs (evaluate path conditions)
//!     → Return: ResolvedNav { section, item, breadcrumb }
//!
//! Table Compilation (at startup):
//!     RouteTableConfig (preset or TOML)
//!     → Validate (unique keys, known sections)
//!     → Compile matchers and exact-path map
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables compiled at startup, immutable at runtime
//! - No regex (exact, prefix and segment matching only)
//! - Deterministic: same input always resolves the same way
//! - First matching rule wins, so carve-outs are listed before broad prefixes

pub mod matcher;
pub mod presets;
pub mod resolver;
pub mod scope;
pub mod table;

pub use resolver::{MenuEntry, ResolvedNav};
pub use scope::{scoped_path, split_device_scope, strip_device_scope};
pub use table::{NavItem, RouteTable, Section};
