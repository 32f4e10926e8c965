//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Route table build:
//!     → debug events at version-scan start/end
//!     → debug event per registered route
//!     → error event per rejected method
//!
//! Consumers:
//!     → tracing subscriber installed by the embedding binary (logging.rs)
//! ```
//!
//! # Design Decisions
//! - Logging is purely observational; no behavior depends on it
//! - Skipped inactive endpoints emit nothing (hiding a route is not an event)

pub mod logging;
