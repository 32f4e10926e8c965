//! Flag resolution and composition.
//!
//! # Responsibilities
//! - Resolve declared-or-unset flags to their defaults (active: true,
//!   deprecated: false)
//! - Compose version-level and endpoint-level flags into effective values
//!
//! # Design Decisions
//! - Pure functions, resolved once at build time, never re-checked per
//!   request
//! - An endpoint is effectively active only if both it and its version are;
//!   it is effectively deprecated if either is

/// Resolve a declared active flag, defaulting to active.
pub fn resolve_active(declared: Option<bool>) -> bool {
    declared.unwrap_or(true)
}

/// Resolve a declared deprecated flag, defaulting to not deprecated.
pub fn resolve_deprecated(declared: Option<bool>) -> bool {
    declared.unwrap_or(false)
}

/// Effective active: endpoint AND version.
pub fn effective_active(endpoint: bool, version: bool) -> bool {
    endpoint && version
}

/// Effective deprecated: endpoint OR version.
pub fn effective_deprecated(endpoint: bool, version: bool) -> bool {
    endpoint || version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(resolve_active(None));
        assert!(!resolve_deprecated(None));
        assert!(!resolve_active(Some(false)));
        assert!(resolve_deprecated(Some(true)));
    }

    #[test]
    fn test_effective_active_truth_table() {
        assert!(effective_active(true, true));
        assert!(!effective_active(true, false));
        assert!(!effective_active(false, true));
        assert!(!effective_active(false, false));
    }

    #[test]
    fn test_effective_deprecated_truth_table() {
        assert!(!effective_deprecated(false, false));
        assert!(effective_deprecated(true, false));
        assert!(effective_deprecated(false, true));
        assert!(effective_deprecated(true, true));
    }
}
