//! Reference strings used by authored content.
//!
//! Resource entries and the legacy prev/next fields address things in
//! different ways: external URLs, bare module ids, `module:` prefixed
//! ids, or already-routed paths. This module provides the parsed,
//! format-agnostic representation.
//!
//! Refs are stored as raw strings in the schema and parsed on demand
//! using [`ModuleRef::parse`] when needed (e.g. for rendering).

use crate::model::Catalog;

/// A parsed content reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModuleRef {
    /// External URL (http://, https://, mailto:, etc.)
    External(String),

    /// Another module in the catalog, by id.
    /// Example: `module:circuit-breaker` or bare `circuit-breaker`.
    Module(String),

    /// An already-routed absolute path.
    /// Example: `/modules/microservices/advanced/bulkhead`.
    Route(String),

    /// Unresolved/unknown ref format.
    /// Stored for diagnostics but not actionable.
    Unknown(String),
}

impl ModuleRef {
    pub fn is_external(&self) -> bool {
        matches!(self, ModuleRef::External(_))
    }

    /// Get the module id if this refs a sibling module.
    pub fn as_module(&self) -> Option<&str> {
        match self {
            ModuleRef::Module(id) => Some(id),
            _ => None,
        }
    }

    /// Parse a raw ref string.
    ///
    /// This handles:
    /// - External URLs (http://, https://, mailto:, tel:)
    /// - Routed paths (/modules/...)
    /// - Prefixed module refs (module:circuit-breaker)
    /// - Bare module ids (circuit-breaker)
    pub fn parse(raw: &str) -> ModuleRef {
        let raw = raw.trim();

        if raw.starts_with("http://")
            || raw.starts_with("https://")
            || raw.starts_with("mailto:")
            || raw.starts_with("tel:")
        {
            return ModuleRef::External(raw.to_string());
        }

        if raw.starts_with('/') {
            return ModuleRef::Route(raw.to_string());
        }

        if let Some(id) = raw.strip_prefix("module:") {
            if is_module_id(id) {
                return ModuleRef::Module(id.to_string());
            }
            return ModuleRef::Unknown(raw.to_string());
        }

        if is_module_id(raw) {
            return ModuleRef::Module(raw.to_string());
        }

        ModuleRef::Unknown(raw.to_string())
    }

    /// Resolve this ref to an href against the catalog's route table.
    ///
    /// Returns `None` when the ref does not lead to a registered path
    /// (unknown module, unregistered route, unparseable ref).
    pub fn resolve(&self, catalog: &Catalog) -> Option<String> {
        match self {
            ModuleRef::External(url) => Some(url.clone()),
            ModuleRef::Module(id) => catalog.module_route(id),
            ModuleRef::Route(route) => {
                if catalog.is_registered(route) {
                    Some(route.clone())
                } else {
                    None
                }
            }
            ModuleRef::Unknown(_) => None,
        }
    }
}

/// Module ids are non-empty kebab-case identifiers.
fn is_module_id(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
