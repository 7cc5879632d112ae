//! Loading an authored content directory into a [`Catalog`].
//!
//! Layout on disk:
//!
//! ```text
//! content/
//!   catalog.json          site title + tracks with sequence tables
//!   modules/
//!     bulkhead.json       one file per module
//!     circuit-breaker.json
//! ```
//!
//! Text is decoded tolerantly (UTF-8 with a Windows-1252 fallback)
//! because authored prose often arrives from word processors.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{Catalog, Module, Track};
use crate::util::decode_text;

/// The `catalog.json` manifest.
#[derive(Debug, Deserialize)]
struct Manifest {
    title: String,
    tracks: Vec<Track>,
}

/// Load and validate a catalog from a content directory.
pub fn load_catalog<P: AsRef<Path>>(dir: P) -> Result<Catalog> {
    let dir = dir.as_ref();
    let manifest_text = read_text(&dir.join("catalog.json"))?;
    let manifest: Manifest = serde_json::from_str(&manifest_text)?;

    let mut catalog = Catalog::new(manifest.title);
    let mut ids = Vec::new();
    for track in manifest.tracks {
        ids.extend(track.modules.iter().cloned());
        catalog.add_track(track);
    }

    let modules_dir = dir.join("modules");
    for id in ids {
        let path = modules_dir.join(format!("{id}.json"));
        if !path.is_file() {
            return Err(Error::UnknownModule(format!(
                "no content file for module '{id}' (expected {})",
                path.display()
            )));
        }
        let module = load_module(&path)?;
        if module.id != id {
            return Err(Error::InvalidModule(format!(
                "{} declares id '{}', expected '{}'",
                path.display(),
                module.id,
                id
            )));
        }
        catalog.insert_module(module)?;
    }

    catalog.validate()?;
    Ok(catalog)
}

/// Load a single module file.
pub fn load_module<P: AsRef<Path>>(path: P) -> Result<Module> {
    let text = read_text(path.as_ref())?;
    parse_module(&text)
}

/// Parse module JSON. Also used by the WASM preview bindings.
pub fn parse_module(text: &str) -> Result<Module> {
    let module: Module = serde_json::from_str(text)?;
    if module.id.trim().is_empty() {
        return Err(Error::MissingElement("module id".into()));
    }
    Ok(module)
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes).into_owned())
}
