//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! ApiConfig (built in code, order-sensitive)
//!     → flags.rs (resolve defaults, compose effective values)
//!     → routing::resolver (inheritance + dedup)
//!     → frozen per-version endpoint lists
//! ```
//!
//! # Design Decisions
//! - Config is immutable once handed to the resolver
//! - All flags are optional with documented defaults, resolved once at
//!   build time
//! - Required fields (route, method, implementation) are constructor
//!   arguments, not options

pub mod flags;
pub mod schema;

pub use schema::{ApiConfig, EndpointConfig, VersionConfig};
