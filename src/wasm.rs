//! WASM bindings for in-browser authoring preview.
//!
//! Exposes the renderer and linter to JavaScript via wasm-bindgen so a
//! content editor can preview a module page and its lint diagnostics
//! without a native build.

use wasm_bindgen::prelude::*;

use crate::import::parse_module;
use crate::lint;
use crate::model::{Catalog, Track};
use crate::nav;
use crate::render::render_page;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a single module's JSON as a standalone preview page.
///
/// The module is placed in a synthetic one-track catalog so navigation
/// and related-module resolution have something to resolve against.
#[wasm_bindgen]
pub fn render_module_preview(module_json: &str) -> Result<String, JsValue> {
    let catalog = preview_catalog(module_json).map_err(to_js)?;
    let module = catalog
        .modules_in_order()
        .next()
        .ok_or_else(|| JsValue::from_str("empty preview catalog"))?;
    let page_nav = nav::resolve(&catalog, &module.id).map_err(to_js)?;
    Ok(render_page(&catalog, module, &page_nav))
}

/// Lint a single module's JSON, returning one message per defect.
#[wasm_bindgen]
pub fn lint_module_preview(module_json: &str) -> Result<Vec<String>, JsValue> {
    let catalog = preview_catalog(module_json).map_err(to_js)?;
    Ok(lint::lint_catalog(&catalog)
        .iter()
        .map(|d| d.to_string())
        .collect())
}

fn preview_catalog(module_json: &str) -> crate::Result<Catalog> {
    let mut module = parse_module(module_json)?;
    if module.subtrack.trim().is_empty() {
        module.subtrack = "preview".to_string();
    }

    let mut catalog = Catalog::new("Preview");
    let mut track = Track::new("preview", "Preview");
    track.modules = vec![module.id.clone()];
    catalog.add_track(track);
    catalog.insert_module(module)?;
    Ok(catalog)
}

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}
