//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! ApiConfig (ordered versions)
//!     → resolver.rs (inherit from predecessor, compose flags, dedup)
//!     → ResolvedVersions (frozen per-version endpoint lists)
//!     → builder.rs (register active endpoints on a fresh axum Router)
//!     → Router + skip report
//! ```
//!
//! # Design Decisions
//! - Resolution runs once at build time; the resolved table is immutable
//! - Version order is configuration order; inheritance looks one step back
//! - Registration failures are per-endpoint and never abort the build

pub mod builder;
pub mod endpoint;
pub mod resolver;

pub use builder::{build_router, RouteTable, RouteTableError};
pub use endpoint::{method_filter, Endpoint, ALLOWED_METHODS};
pub use resolver::{resolve, ResolvedVersion, ResolvedVersions};
