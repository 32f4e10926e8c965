//! Demo server for the versioned route table builder.
//!
//! Builds a two-version sample API and serves it:
//! - `GET /v1/hello` — declared in v1
//! - `GET /v2/hello` — overridden in v2
//! - `POST /v2/echo` — declared in v1 with validation, inherited by v2
//!
//! ```text
//! ApiConfig (versions + endpoints)
//!     → routing (inherit, compose flags, dedup)
//!     → axum Router
//!     → axum::serve with graceful shutdown
//! ```

use axum::body::Body;
use axum::http::Request;
use axum::response::IntoResponse;
use axum::Json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use versioned_router::{
    implementation, validation, ApiConfig, ApiVersion, EndpointConfig, RouteTable,
    ValidationOutcome, VersionConfig,
};

fn sample_config() -> ApiConfig {
    let hello = implementation(|req: Request<Body>| async move {
        let version = req
            .extensions()
            .get::<ApiVersion>()
            .map(|v| v.0.clone())
            .unwrap_or_default();
        Json(serde_json::json!({ "message": "hello", "version": version })).into_response()
    });

    let echo = implementation(|req: Request<Body>| async move {
        match axum::body::to_bytes(req.into_body(), 64 * 1024).await {
            Ok(bytes) => bytes.to_vec().into_response(),
            Err(_) => axum::http::StatusCode::PAYLOAD_TOO_LARGE.into_response(),
        }
    });

    let require_json = validation(|req: &Request<Body>| {
        let is_json = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        if is_json {
            ValidationOutcome::ok()
        } else {
            ValidationOutcome::fail("expected application/json")
        }
    });

    ApiConfig::new()
        .version(
            VersionConfig::new("v1")
                .endpoint(EndpointConfig::new("/hello", "GET", hello.clone()))
                .endpoint(EndpointConfig::new("/echo", "POST", echo).validation(require_json)),
        )
        // v2 inherits /echo and overrides /hello.
        .version(VersionConfig::new("v2").endpoint(EndpointConfig::new("/hello", "GET", hello)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    versioned_router::observability::logging::init();

    tracing::info!("versioned-router demo starting");

    let table = RouteTable::from_config(&sample_config());
    for err in table.skipped() {
        tracing::warn!(error = %err, "endpoint not registered");
    }

    let app = table.into_router().layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
