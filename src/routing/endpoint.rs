//! Resolved endpoint records.
//!
//! # Responsibilities
//! - Hold the fully resolved description of one route (version tag, path,
//!   method, middleware chain, callables, effective flags)
//! - Map declared method strings onto the host router's method filters
//!
//! # Design Decisions
//! - Immutable after construction; inheritance clones instead of mutating
//! - Callables are `Arc`-shared so clones across versions are cheap and the
//!   same implementation backs a route in every version that carries it
//! - Method check is case-sensitive against canonical names; lower-casing
//!   is the router's concern, not the record's

use std::fmt;

use axum::routing::MethodFilter;

use crate::http::handler::{Implementation, Validation};
use crate::http::middleware::Middleware;

/// Methods accepted at registration time, in canonical casing.
pub const ALLOWED_METHODS: [&str; 8] = [
    "GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS", "TRACE",
];

/// Map a declared method string onto the router's method filter.
///
/// Returns `None` for anything outside [`ALLOWED_METHODS`], including
/// non-canonical casing such as `"get"`.
pub fn method_filter(method: &str) -> Option<MethodFilter> {
    match method {
        "GET" => Some(MethodFilter::GET),
        "POST" => Some(MethodFilter::POST),
        "PUT" => Some(MethodFilter::PUT),
        "PATCH" => Some(MethodFilter::PATCH),
        "DELETE" => Some(MethodFilter::DELETE),
        "HEAD" => Some(MethodFilter::HEAD),
        "OPTIONS" => Some(MethodFilter::OPTIONS),
        "TRACE" => Some(MethodFilter::TRACE),
        _ => None,
    }
}

/// One fully resolved route within a version.
#[derive(Clone)]
pub struct Endpoint {
    /// Version this record belongs to in the resolved table.
    pub api_version: String,

    /// Declared path, leading slash included.
    pub route: String,

    /// Declared HTTP verb, original casing preserved.
    pub method: String,

    /// Middleware chain, pass-through step first.
    pub middleware: Vec<Middleware>,

    pub validation: Option<Validation>,
    pub implementation: Implementation,

    /// Effective active flag (endpoint AND version).
    pub active: bool,

    /// Effective deprecated flag (endpoint OR version).
    pub deprecated: bool,
}

impl Endpoint {
    /// The path this endpoint is mounted at: `/{api_version}{route}`.
    pub fn mount_path(&self) -> String {
        format!("/{}{}", self.api_version, self.route)
    }

    /// Clone this endpoint into a successor version.
    ///
    /// Inheritance re-tags the version and activates the copy; the
    /// deprecated flag carries over from the source version.
    pub fn inherit_into(&self, api_version: &str) -> Endpoint {
        let mut inherited = self.clone();
        inherited.api_version = api_version.to_string();
        inherited.active = true;
        inherited
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("api_version", &self.api_version)
            .field("route", &self.route)
            .field("method", &self.method)
            .field("middleware", &self.middleware.len())
            .field("validation", &self.validation.is_some())
            .field("active", &self.active)
            .field("deprecated", &self.deprecated)
            .finish()
    }
}
