//! Declarative API configuration.
//!
//! Configuration is built in code rather than deserialized: endpoints carry
//! callables (validation, implementation) that have no on-disk form. Version
//! order is declaration order, and declaration order is inheritance order.

use crate::http::handler::{Implementation, Validation};
use crate::http::middleware::Middleware;

/// Root configuration: ordered API versions.
///
/// Insertion order is significant. Each version implicitly inherits the
/// non-deprecated endpoints of the version declared immediately before it.
#[derive(Clone, Default)]
pub struct ApiConfig {
    pub versions: Vec<VersionConfig>,
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version. Order of calls is version precedence order.
    pub fn version(mut self, version: VersionConfig) -> Self {
        self.versions.push(version);
        self
    }
}

/// One API version: identifier, optional flags, declared endpoints.
#[derive(Clone)]
pub struct VersionConfig {
    /// Version identifier, e.g. "v1". Forms the mount prefix `/{id}`.
    pub id: String,

    /// Version-level active flag. Unset means active.
    pub active: Option<bool>,

    /// Version-level deprecated flag. Unset means not deprecated.
    pub deprecated: Option<bool>,

    /// Endpoints declared by this version, in declaration order.
    pub endpoints: Vec<EndpointConfig>,
}

impl VersionConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: None,
            deprecated: None,
            endpoints: Vec::new(),
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    pub fn endpoint(mut self, endpoint: EndpointConfig) -> Self {
        self.endpoints.push(endpoint);
        self
    }
}

/// One declared endpoint within a version.
///
/// `route` and `implementation` are constructor arguments, so a config with
/// either missing is unrepresentable.
#[derive(Clone)]
pub struct EndpointConfig {
    /// Path with leading slash, mounted under the version prefix.
    pub route: String,

    /// HTTP verb, matched case-sensitively against the canonical method set
    /// at registration time.
    pub method: String,

    /// Endpoint-level active flag. Unset means active.
    pub active: Option<bool>,

    /// Endpoint-level deprecated flag. Unset means not deprecated.
    pub deprecated: Option<bool>,

    /// Declared middleware, run after the default pass-through step.
    pub middleware: Vec<Middleware>,

    /// Optional request validator. Absent means always valid.
    pub validation: Option<Validation>,

    /// The request handler.
    pub implementation: Implementation,
}

impl EndpointConfig {
    pub fn new(
        route: impl Into<String>,
        method: impl Into<String>,
        implementation: Implementation,
    ) -> Self {
        Self {
            route: route.into(),
            method: method.into(),
            active: None,
            deprecated: None,
            middleware: Vec::new(),
            validation: None,
            implementation,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    pub fn middleware(mut self, middleware: Middleware) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }
}
