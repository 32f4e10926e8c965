//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries embedding this crate
//!
//! # Design Decisions
//! - Log level configurable via `RUST_LOG`, with a debug default for this
//!   crate so route registration events are visible out of the box
//! - The library itself only emits events; installing a subscriber is the
//!   binary's choice

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "versioned_router=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
