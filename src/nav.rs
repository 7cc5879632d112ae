//! Previous/Next navigation resolution.
//!
//! Navigation is derived from the catalog's sequence tables, never
//! from the legacy authored prev/next fields (those were inconsistent
//! in the source material; the [`lint`](crate::lint) module reports
//! where they disagree). Deriving from one authoritative order makes
//! the chain symmetric by construction: if A's Next is B, B's Previous
//! is A.
//!
//! Chain ends resolve to the owning track's index page, so every page
//! renders exactly one Previous and one Next control and both targets
//! are always registered paths.

use crate::error::{Error, Result};
use crate::model::{Catalog, Track};

/// A resolved navigation endpoint: display label plus routable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    pub label: String,
    pub route: String,
}

/// The footer navigation of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNav {
    pub prev: NavTarget,
    pub next: NavTarget,
}

/// Resolve footer navigation for a module.
///
/// Fails when the module is not part of any track sequence.
pub fn resolve(catalog: &Catalog, module_id: &str) -> Result<PageNav> {
    let track = catalog
        .track_of(module_id)
        .ok_or_else(|| Error::UnknownModule(module_id.to_string()))?;
    let pos = track
        .modules
        .iter()
        .position(|id| id == module_id)
        .ok_or_else(|| Error::UnknownModule(module_id.to_string()))?;

    let prev = match pos.checked_sub(1).map(|i| track.modules[i].as_str()) {
        Some(id) => module_target(catalog, id)?,
        None => track_target(catalog, track),
    };
    let next = match track.modules.get(pos + 1).map(String::as_str) {
        Some(id) => module_target(catalog, id)?,
        None => track_target(catalog, track),
    };

    Ok(PageNav { prev, next })
}

/// The sequence neighbors of a module, if any.
///
/// Used by the linter to compare authored refs against the derived
/// order; chain ends are `None` here (they resolve to the track index
/// in [`resolve`]).
pub fn neighbors<'a>(catalog: &'a Catalog, module_id: &str) -> (Option<&'a str>, Option<&'a str>) {
    let Some(track) = catalog.track_of(module_id) else {
        return (None, None);
    };
    let Some(pos) = track.modules.iter().position(|id| id == module_id) else {
        return (None, None);
    };
    let prev = pos.checked_sub(1).map(|i| track.modules[i].as_str());
    let next = track.modules.get(pos + 1).map(String::as_str);
    (prev, next)
}

fn module_target(catalog: &Catalog, id: &str) -> Result<NavTarget> {
    let module = catalog
        .module(id)
        .ok_or_else(|| Error::UnknownModule(id.to_string()))?;
    let route = catalog
        .module_route(id)
        .ok_or_else(|| Error::UnknownModule(id.to_string()))?;
    Ok(NavTarget {
        label: module.title.clone(),
        route,
    })
}

fn track_target(catalog: &Catalog, track: &Track) -> NavTarget {
    NavTarget {
        label: track.title.clone(),
        route: catalog.track_route(track),
    }
}
