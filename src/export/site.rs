//! Site generation: every file a build produces.
//!
//! Generation is split from writing so the same file set can land in a
//! directory tree ([`write_site`]) or a ZIP bundle
//! ([`BundleExporter`](super::BundleExporter)) without re-rendering.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Catalog;
use crate::nav;
use crate::render::{self, css};

use super::sitemap::build_sitemap;

/// Build-time options shared by all exporters.
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    /// Absolute site prefix for sitemap `<loc>` entries,
    /// e.g. `https://learn.example.com`. Routes stay site-relative
    /// in the pages themselves.
    pub base_url: Option<String>,
}

/// Summary of a completed build.
#[derive(Debug, Clone)]
pub struct SiteSummary {
    /// Number of HTML pages produced (module pages + indexes).
    pub pages: usize,
    /// Total files produced, including stylesheet and sitemap.
    pub files: usize,
}

/// One output file: site-relative path plus contents.
pub(crate) type SiteFile = (String, Vec<u8>);

/// Render every output file for the catalog.
pub(crate) fn site_files(catalog: &Catalog, options: &SiteOptions) -> Result<Vec<SiteFile>> {
    let mut files = Vec::new();

    files.push((
        "index.html".to_string(),
        render::render_site_index(catalog).into_bytes(),
    ));

    for track in catalog.tracks() {
        files.push((
            route_to_path(&catalog.track_route(track)),
            render::render_track_index(catalog, track).into_bytes(),
        ));

        for id in &track.modules {
            let Some(module) = catalog.module(id) else {
                continue;
            };
            let Some(route) = catalog.module_route(id) else {
                continue;
            };
            let page_nav = nav::resolve(catalog, id)?;
            files.push((
                route_to_path(&route),
                render::render_page(catalog, module, &page_nav).into_bytes(),
            ));
        }
    }

    files.push((
        css::stylesheet_filename(),
        css::STYLESHEET.as_bytes().to_vec(),
    ));
    files.push((
        "sitemap.xml".to_string(),
        build_sitemap(catalog, options.base_url.as_deref()).into_bytes(),
    ));

    Ok(files)
}

/// Map a route to its output path (pretty URLs: one directory with an
/// `index.html` per page).
pub(crate) fn route_to_path(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}/index.html")
    }
}

/// Compile the catalog into a directory tree.
pub fn write_site<P: AsRef<Path>>(catalog: &Catalog, out_dir: P) -> Result<SiteSummary> {
    write_site_with(catalog, out_dir, &SiteOptions::default())
}

/// Compile the catalog into a directory tree with explicit options.
pub fn write_site_with<P: AsRef<Path>>(
    catalog: &Catalog,
    out_dir: P,
    options: &SiteOptions,
) -> Result<SiteSummary> {
    let out_dir = out_dir.as_ref();
    let files = site_files(catalog, options)?;

    let mut pages = 0;
    for (path, data) in &files {
        let dest = out_dir.join(path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, data)?;
        if path.ends_with(".html") {
            pages += 1;
        }
    }

    Ok(SiteSummary {
        pages,
        files: files.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_to_path() {
        assert_eq!(route_to_path("/"), "index.html");
        assert_eq!(route_to_path("/modules/security"), "modules/security/index.html");
        assert_eq!(
            route_to_path("/modules/microservices/advanced/bulkhead"),
            "modules/microservices/advanced/bulkhead/index.html"
        );
    }
}
