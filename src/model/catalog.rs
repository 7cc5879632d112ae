//! The catalog: every module in the site, plus the authoritative
//! curriculum order.
//!
//! The legacy source scattered prev/next references across the pages
//! themselves, and several were self-referencing or pointed at the
//! wrong sibling. Here the order lives in one place: each [`Track`]
//! carries the ordered list of its member module ids, and everything
//! else (navigation, indexes, the sitemap) is derived from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::slug::slugify;

use super::module::Module;

/// A top-level curriculum grouping ("microservices", "security", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    /// Member module ids in curriculum order. This is the single
    /// authoritative sequence for the track.
    pub modules: Vec<String>,
}

impl Track {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            modules: Vec::new(),
        }
    }
}

/// The complete site: tracks in display order and modules by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    title: String,
    tracks: Vec<Track>,
    modules: BTreeMap<String, Module>,
}

impl Catalog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// The site title, shown in page `<title>` elements and indexes.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Insert a module. Duplicate ids are a catalog-construction error.
    pub fn insert_module(&mut self, module: Module) -> Result<()> {
        if self.modules.contains_key(&module.id) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate module id: {}",
                module.id
            )));
        }
        self.modules.insert(module.id.clone(), module);
        Ok(())
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.get(id)
    }

    /// Number of modules in the catalog.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules in curriculum order (track by track).
    pub fn modules_in_order(&self) -> impl Iterator<Item = &Module> {
        self.tracks
            .iter()
            .flat_map(|t| t.modules.iter())
            .filter_map(|id| self.modules.get(id))
    }

    /// The track whose sequence contains the given module id.
    pub fn track_of(&self, module_id: &str) -> Option<&Track> {
        self.tracks
            .iter()
            .find(|t| t.modules.iter().any(|id| id == module_id))
    }

    /// Routable path for a track index page: `/modules/<track>`.
    pub fn track_route(&self, track: &Track) -> String {
        format!("/modules/{}", slugify(&track.id))
    }

    /// Routable path for a module page:
    /// `/modules/<track>/<subtrack>/<topic>`.
    ///
    /// Returns `None` if the module is not in the catalog or not part
    /// of any track sequence.
    pub fn module_route(&self, module_id: &str) -> Option<String> {
        let module = self.modules.get(module_id)?;
        let track = self.track_of(module_id)?;
        Some(format!(
            "/modules/{}/{}/{}",
            slugify(&track.id),
            slugify(&module.subtrack),
            slugify(&module.id)
        ))
    }

    /// Every registered path: the site root, one index per track, and
    /// one page per sequenced module.
    pub fn routes(&self) -> Vec<String> {
        let mut routes = vec!["/".to_string()];
        for track in &self.tracks {
            routes.push(self.track_route(track));
            for id in &track.modules {
                if let Some(route) = self.module_route(id) {
                    routes.push(route);
                }
            }
        }
        routes
    }

    pub fn is_registered(&self, route: &str) -> bool {
        self.routes().iter().any(|r| r == route)
    }

    /// Check catalog-level invariants.
    ///
    /// - the site title is present
    /// - every sequence entry names a known module
    /// - every module is sequenced exactly once
    /// - every module carries a non-empty title, badge, and subtrack
    ///   (authoring errors, rejected up front rather than at render time)
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::MissingElement("catalog title".into()));
        }

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for track in &self.tracks {
            for id in &track.modules {
                if !self.modules.contains_key(id.as_str()) {
                    return Err(Error::UnknownModule(format!(
                        "track '{}' sequences unknown module '{}'",
                        track.id, id
                    )));
                }
                *seen.entry(id.as_str()).or_default() += 1;
            }
        }

        for (id, count) in &seen {
            if *count > 1 {
                return Err(Error::InvalidCatalog(format!(
                    "module '{}' appears in {} sequence positions",
                    id, count
                )));
            }
        }

        for (id, module) in &self.modules {
            if !seen.contains_key(id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "module '{}' is not part of any track sequence",
                    id
                )));
            }
            if module.title.trim().is_empty() {
                return Err(Error::MissingElement(format!("title of module '{}'", id)));
            }
            if module.badge.trim().is_empty() {
                return Err(Error::MissingElement(format!("badge of module '{}'", id)));
            }
            if module.subtrack.trim().is_empty() {
                return Err(Error::MissingElement(format!(
                    "subtrack of module '{}'",
                    id
                )));
            }
        }

        Ok(())
    }
}
