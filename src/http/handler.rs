//! Per-route request handling.
//!
//! # Responsibilities
//! - Define the callable types endpoint authors supply (validation,
//!   implementation)
//! - Stamp each request with its resolved API version
//! - Run the middleware chain, then validation, then the implementation
//!
//! # Design Decisions
//! - Validation must fully resolve before any response is sent and before
//!   the implementation runs; a failed validation never reaches the
//!   implementation
//! - Validation borrows the request (it inspects, never consumes); the
//!   implementation takes ownership
//! - Validation failure is normal control flow (422), not an error path

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

use crate::http::middleware::{run_chain, BoxFuture};
use crate::http::response::validation_failure;
use crate::routing::endpoint::Endpoint;

/// The endpoint's request handler. Owns the request, produces the response.
pub type Implementation = Arc<dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;

/// Optional request validator, run before the implementation. Inspects the
/// request synchronously, may suspend for the verdict; the verdict is
/// awaited before dispatch.
pub type Validation =
    Arc<dyn Fn(&Request<Body>) -> BoxFuture<'static, ValidationOutcome> + Send + Sync>;

/// Verdict returned by a validation function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}

/// API version stamped into request extensions before dispatch.
///
/// Middleware and implementations read it via `req.extensions().get::<ApiVersion>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(pub String);

/// Wrap a plain async function as an [`Implementation`].
pub fn implementation<F, Fut>(f: F) -> Implementation
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}

/// Wrap a synchronous check as a [`Validation`]. Validators that suspend can
/// implement the type directly.
pub fn validation<F>(f: F) -> Validation
where
    F: Fn(&Request<Body>) -> ValidationOutcome + Send + Sync + 'static,
{
    Arc::new(move |req| {
        let outcome = f(req);
        Box::pin(async move { outcome })
    })
}

/// The runtime entry point for one registered route.
pub async fn handle(endpoint: Arc<Endpoint>, mut req: Request<Body>) -> Response {
    req.extensions_mut()
        .insert(ApiVersion(endpoint.api_version.clone()));

    let req = match run_chain(&endpoint.middleware, req).await {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    if let Some(validate) = &endpoint.validation {
        let outcome = validate(&req).await;
        if !outcome.success {
            return validation_failure(outcome.message);
        }
    }

    (endpoint.implementation)(req).await
}
