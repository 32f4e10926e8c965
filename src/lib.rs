//! Versioned HTTP route table builder.
//!
//! Turns a declarative, order-sensitive description of API versions into a
//! populated axum [`Router`](axum::Router). Each version implicitly inherits
//! the non-deprecated endpoints of its predecessor, endpoints override on
//! (route, method) identity, and activation/deprecation flags compose across
//! the version and endpoint levels. Registered handlers stamp the request
//! with its resolved API version and run the endpoint's validation before
//! dispatching to its implementation.
//!
//! ```no_run
//! use versioned_router::{build_router, ApiConfig, EndpointConfig, VersionConfig};
//! use versioned_router::implementation;
//! use axum::{body::Body, http::Request, response::IntoResponse};
//!
//! let config = ApiConfig::new()
//!     .version(VersionConfig::new("v1").endpoint(EndpointConfig::new(
//!         "/hello",
//!         "GET",
//!         implementation(|_req: Request<Body>| async { "hello from v1".into_response() }),
//!     )))
//!     // v2 inherits GET /hello automatically.
//!     .version(VersionConfig::new("v2"));
//!
//! let router = build_router(&config);
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::schema::{ApiConfig, EndpointConfig, VersionConfig};
pub use http::handler::{
    implementation, validation, ApiVersion, Implementation, Validation, ValidationOutcome,
};
pub use http::middleware::{middleware, Middleware};
pub use routing::builder::{build_router, RouteTable, RouteTableError};
