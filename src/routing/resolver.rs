//! Version inheritance and endpoint resolution.
//!
//! # Responsibilities
//! - Walk versions in configuration order
//! - Inherit non-deprecated endpoints from the immediate predecessor
//! - Compose effective flags and construct endpoint records
//! - Deduplicate on (route, method), later declarations winning
//!
//! # Design Decisions
//! - Insert-or-replace is keyed by a (route, method) index into the ordered
//!   list: O(1) lookup, insertion order preserved, duplicate keys
//!   structurally impossible
//! - A replaced endpoint keeps its original position in the list, matching
//!   in-place override semantics
//! - No errors raised here; malformed configs are unrepresentable upstream

use std::collections::HashMap;

use crate::config::flags;
use crate::config::schema::ApiConfig;
use crate::http::middleware::pass_through;
use crate::routing::endpoint::Endpoint;

/// One version's resolved endpoint list, deduplicated on (route, method).
#[derive(Debug, Clone, Default)]
pub struct ResolvedVersion {
    pub id: String,
    endpoints: Vec<Endpoint>,
    index: HashMap<(String, String), usize>,
}

impl ResolvedVersion {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            endpoints: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert-or-replace by (route, method). A match is replaced in place at
    /// its existing position; otherwise the endpoint is appended.
    pub fn insert(&mut self, endpoint: Endpoint) {
        let key = (endpoint.route.clone(), endpoint.method.clone());
        match self.index.get(&key) {
            Some(&position) => self.endpoints[position] = endpoint,
            None => {
                self.index.insert(key, self.endpoints.len());
                self.endpoints.push(endpoint);
            }
        }
    }

    /// Resolved endpoints in insertion order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn get(&self, route: &str, method: &str) -> Option<&Endpoint> {
        self.index
            .get(&(route.to_string(), method.to_string()))
            .map(|&position| &self.endpoints[position])
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// All versions' resolved endpoint lists, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct ResolvedVersions {
    versions: Vec<ResolvedVersion>,
}

impl ResolvedVersions {
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedVersion> {
        self.versions.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ResolvedVersion> {
        self.versions.iter().find(|v| v.id == id)
    }
}

/// Resolve the full configuration into per-version endpoint lists.
///
/// Per version, in configuration order: resolve version flags, inherit the
/// predecessor's non-deprecated endpoints (re-tagged and re-activated), then
/// merge the version's own declarations, overriding inherited entries that
/// collide on (route, method).
pub fn resolve(config: &ApiConfig) -> ResolvedVersions {
    let mut versions: Vec<ResolvedVersion> = Vec::with_capacity(config.versions.len());

    for version_config in &config.versions {
        let version_active = flags::resolve_active(version_config.active);
        let version_deprecated = flags::resolve_deprecated(version_config.deprecated);

        let mut resolved = ResolvedVersion::new(&version_config.id);

        // The first version has no predecessor to inherit from.
        if let Some(previous) = versions.last() {
            for endpoint in previous.endpoints() {
                if !endpoint.deprecated {
                    resolved.insert(endpoint.inherit_into(&version_config.id));
                }
            }
        }

        for declared in &version_config.endpoints {
            let endpoint_active = flags::resolve_active(declared.active);
            let endpoint_deprecated = flags::resolve_deprecated(declared.deprecated);

            let mut middleware = Vec::with_capacity(declared.middleware.len() + 1);
            middleware.push(pass_through());
            middleware.extend(declared.middleware.iter().cloned());

            resolved.insert(Endpoint {
                api_version: version_config.id.clone(),
                route: declared.route.clone(),
                method: declared.method.clone(),
                middleware,
                validation: declared.validation.clone(),
                implementation: declared.implementation.clone(),
                active: flags::effective_active(endpoint_active, version_active),
                deprecated: flags::effective_deprecated(endpoint_deprecated, version_deprecated),
            });
        }

        versions.push(resolved);
    }

    ResolvedVersions { versions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{EndpointConfig, VersionConfig};
    use crate::http::handler::{implementation, Implementation};
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    fn impl_fn() -> Implementation {
        implementation(|_req: Request<Body>| async { "ok".into_response() })
    }

    fn endpoint(route: &str, method: &str) -> EndpointConfig {
        EndpointConfig::new(route, method, impl_fn())
    }

    #[test]
    fn test_single_version_resolves_declared_endpoints() {
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .endpoint(endpoint("/a", "GET"))
                .endpoint(endpoint("/b", "POST")),
        );

        let resolved = resolve(&config);
        let v1 = resolved.get("v1").unwrap();
        assert_eq!(v1.len(), 2);
        assert_eq!(v1.endpoints()[0].route, "/a");
        assert_eq!(v1.endpoints()[1].route, "/b");
        assert!(v1.endpoints().iter().all(|e| e.active && !e.deprecated));
    }

    #[test]
    fn test_pass_through_prepended_to_declared_middleware() {
        let declared = crate::http::middleware::middleware(|req: Request<Body>| async { Ok(req) });
        let config = ApiConfig::new().version(
            VersionConfig::new("v1").endpoint(endpoint("/a", "GET").middleware(declared)),
        );

        let resolved = resolve(&config);
        let e = resolved.get("v1").unwrap().get("/a", "GET").unwrap();
        assert_eq!(e.middleware.len(), 2);
    }

    #[test]
    fn test_successor_inherits_non_deprecated_endpoints() {
        let shared = impl_fn();
        let config = ApiConfig::new()
            .version(VersionConfig::new("v1").endpoint(EndpointConfig::new(
                "/a",
                "GET",
                shared.clone(),
            )))
            .version(VersionConfig::new("v2"));

        let resolved = resolve(&config);
        let inherited = resolved.get("v2").unwrap().get("/a", "GET").unwrap();
        assert_eq!(inherited.api_version, "v2");
        assert!(inherited.active);
        assert!(Arc::ptr_eq(&inherited.implementation, &shared));
    }

    #[test]
    fn test_inheritance_activates_inactive_endpoints() {
        let config = ApiConfig::new()
            .version(VersionConfig::new("v1").endpoint(endpoint("/a", "GET").active(false)))
            .version(VersionConfig::new("v2"));

        let resolved = resolve(&config);
        assert!(!resolved.get("v1").unwrap().get("/a", "GET").unwrap().active);
        assert!(resolved.get("v2").unwrap().get("/a", "GET").unwrap().active);
    }

    #[test]
    fn test_deprecated_endpoints_are_not_inherited() {
        let config = ApiConfig::new()
            .version(
                VersionConfig::new("v1")
                    .endpoint(endpoint("/a", "GET").deprecated(true))
                    .endpoint(endpoint("/b", "GET")),
            )
            .version(VersionConfig::new("v2"));

        let resolved = resolve(&config);
        let v2 = resolved.get("v2").unwrap();
        assert!(v2.get("/a", "GET").is_none());
        assert!(v2.get("/b", "GET").is_some());
        assert_eq!(v2.len(), 1);
    }

    #[test]
    fn test_inherited_deprecation_carries_and_stops_next_hop() {
        let config = ApiConfig::new()
            .version(VersionConfig::new("v1").endpoint(endpoint("/a", "GET")))
            .version(VersionConfig::new("v2").deprecated(true))
            .version(VersionConfig::new("v3"));

        let resolved = resolve(&config);
        // v2 inherits /a from v1; version-level deprecation only applies to
        // v2's own declarations, so the inherited copy stays serveable.
        let v2 = resolved.get("v2").unwrap().get("/a", "GET").unwrap();
        assert!(!v2.deprecated);
        assert!(resolved.get("v3").unwrap().get("/a", "GET").is_some());
    }

    #[test]
    fn test_version_deprecation_marks_own_declarations() {
        let config = ApiConfig::new()
            .version(VersionConfig::new("v1").deprecated(true).endpoint(endpoint("/a", "GET")))
            .version(VersionConfig::new("v2"));

        let resolved = resolve(&config);
        assert!(resolved.get("v1").unwrap().get("/a", "GET").unwrap().deprecated);
        assert!(resolved.get("v2").unwrap().is_empty());
    }

    #[test]
    fn test_version_inactive_composes_into_endpoints() {
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .active(false)
                .endpoint(endpoint("/a", "GET"))
                .endpoint(endpoint("/b", "GET").active(true)),
        );

        let resolved = resolve(&config);
        let v1 = resolved.get("v1").unwrap();
        assert!(v1.endpoints().iter().all(|e| !e.active));
    }

    #[test]
    fn test_redeclaration_replaces_in_place() {
        let override_impl = impl_fn();
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .endpoint(endpoint("/a", "GET"))
                .endpoint(endpoint("/b", "GET"))
                .endpoint(EndpointConfig::new("/a", "GET", override_impl.clone())),
        );

        let resolved = resolve(&config);
        let v1 = resolved.get("v1").unwrap();
        assert_eq!(v1.len(), 2);
        // Replacement keeps the original position.
        assert_eq!(v1.endpoints()[0].route, "/a");
        assert!(Arc::ptr_eq(&v1.endpoints()[0].implementation, &override_impl));
    }

    #[test]
    fn test_override_of_inherited_endpoint() {
        let v1_impl = impl_fn();
        let v2_impl = impl_fn();
        let config = ApiConfig::new()
            .version(VersionConfig::new("v1").endpoint(EndpointConfig::new(
                "/a",
                "GET",
                v1_impl.clone(),
            )))
            .version(VersionConfig::new("v2").endpoint(EndpointConfig::new(
                "/a",
                "GET",
                v2_impl.clone(),
            )));

        let resolved = resolve(&config);
        let e = resolved.get("v2").unwrap().get("/a", "GET").unwrap();
        assert_eq!(resolved.get("v2").unwrap().len(), 1);
        assert!(Arc::ptr_eq(&e.implementation, &v2_impl));
        assert!(!Arc::ptr_eq(&e.implementation, &v1_impl));
    }

    #[test]
    fn test_same_route_different_method_both_kept() {
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .endpoint(endpoint("/a", "GET"))
                .endpoint(endpoint("/a", "POST")),
        );

        let resolved = resolve(&config);
        assert_eq!(resolved.get("v1").unwrap().len(), 2);
    }

    #[test]
    fn test_method_casing_distinguishes_at_dedup_time() {
        // Dedup compares the declared casing; normalization happens at
        // registration, where "get" is rejected.
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .endpoint(endpoint("/a", "GET"))
                .endpoint(endpoint("/a", "get")),
        );

        let resolved = resolve(&config);
        assert_eq!(resolved.get("v1").unwrap().len(), 2);
    }

    #[test]
    fn test_inheritance_chains_across_three_versions() {
        let config = ApiConfig::new()
            .version(VersionConfig::new("v1").endpoint(endpoint("/a", "GET")))
            .version(VersionConfig::new("v2").endpoint(endpoint("/b", "GET")))
            .version(VersionConfig::new("v3"));

        let resolved = resolve(&config);
        let v3 = resolved.get("v3").unwrap();
        assert_eq!(v3.len(), 2);
        assert!(v3.get("/a", "GET").is_some());
        assert!(v3.get("/b", "GET").is_some());
        assert!(v3.endpoints().iter().all(|e| e.api_version == "v3"));
    }
}
