//! Middleware chain primitives.
//!
//! # Responsibilities
//! - Define the request-transformer shape shared by all endpoint middleware
//! - Provide the default pass-through middleware prepended to every chain
//! - Run a chain in declaration order, honoring short-circuits
//!
//! # Design Decisions
//! - Middleware transforms the request or short-circuits with a response;
//!   it never sees the final response (the handler wrapper owns dispatch)
//! - Chains are `Arc`-shared so inherited endpoints clone cheaply
//! - A short-circuit response is returned to the client verbatim

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

/// Boxed future used by all endpoint-supplied callables.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One request-processing step. Returns the (possibly modified) request to
/// continue the chain, or a response to short-circuit it.
pub type Middleware =
    Arc<dyn Fn(Request<Body>) -> BoxFuture<'static, Result<Request<Body>, Response>> + Send + Sync>;

/// The default pass-through middleware: forwards the request unchanged.
pub fn pass_through() -> Middleware {
    Arc::new(|req| Box::pin(async move { Ok(req) }))
}

/// Wrap a plain async function as a [`Middleware`].
pub fn middleware<F, Fut>(f: F) -> Middleware
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Request<Body>, Response>> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}

/// Run each middleware in order, threading the request through.
pub async fn run_chain(
    chain: &[Middleware],
    mut req: Request<Body>,
) -> Result<Request<Body>, Response> {
    for step in chain {
        req = step(req).await?;
    }
    Ok(req)
}
