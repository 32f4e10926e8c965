//! Route table construction.
//!
//! # Responsibilities
//! - Resolve the configuration and register every active endpoint on a
//!   fresh axum `Router`
//! - Reject unrecognized methods per endpoint without aborting the build
//! - Report skipped registrations to the caller
//!
//! # Design Decisions
//! - Every build returns a newly constructed router; there is no shared
//!   process-wide instance
//! - Inactive endpoints are skipped silently (hiding a route via
//!   `active: false` is legitimate, not an error)
//! - An unrecognized method skips that one endpoint, logs an error, and is
//!   recorded in the skip report; the rest of the table still registers

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::routing::on;
use axum::Router;
use thiserror::Error;

use crate::config::schema::ApiConfig;
use crate::http::handler;
use crate::routing::endpoint::method_filter;
use crate::routing::resolver::resolve;

/// Non-fatal, per-endpoint registration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("HTTP method not recognised: '{method} {path}'")]
    UnrecognizedMethod { method: String, path: String },
}

/// A built route table: the populated router plus the registrations that
/// were skipped as non-fatal errors.
pub struct RouteTable {
    router: Router,
    skipped: Vec<RouteTableError>,
}

impl RouteTable {
    /// Resolve the configuration and register all active endpoints.
    pub fn from_config(config: &ApiConfig) -> Self {
        let resolved = resolve(config);
        let mut router = Router::new();
        let mut skipped = Vec::new();

        for version in resolved.iter() {
            tracing::debug!(version = %version.id, "start of API version");

            for endpoint in version.endpoints() {
                if !endpoint.active {
                    continue;
                }

                let path = endpoint.mount_path();
                let Some(filter) = method_filter(&endpoint.method) else {
                    let err = RouteTableError::UnrecognizedMethod {
                        method: endpoint.method.clone(),
                        path,
                    };
                    tracing::error!(error = %err, "skipping route");
                    skipped.push(err);
                    continue;
                };

                tracing::debug!(method = %endpoint.method, path = %path, "adding route");

                let captured = Arc::new(endpoint.clone());
                let wrapper = move |req: Request<Body>| {
                    let endpoint = captured.clone();
                    async move { handler::handle(endpoint, req).await }
                };
                router = router.route(&path, on(filter, wrapper));
            }

            tracing::debug!(version = %version.id, "end of API version");
        }

        Self { router, skipped }
    }

    /// Registrations skipped due to non-fatal errors.
    pub fn skipped(&self) -> &[RouteTableError] {
        &self.skipped
    }

    /// The populated router, the single artifact of the build.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Build a router from the configuration, discarding the skip report.
pub fn build_router(config: &ApiConfig) -> Router {
    RouteTable::from_config(config).into_router()
}
