//! End-to-end site compilation: directory layout, fingerprinted
//! stylesheet, sitemap coverage, and bundle/directory parity.

use std::io::{Cursor, Read};

use tempfile::TempDir;

use didact::export::{BundleExporter, Exporter, SiteOptions, write_site_with};
use didact::load_catalog;
use didact::render::stylesheet_filename;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_content() -> String {
    format!("{}/content", FIXTURES_DIR)
}

#[test]
fn test_site_layout_follows_route_convention() {
    let catalog = load_catalog(fixture_content()).expect("Failed to load fixture catalog");
    let out = TempDir::new().expect("Failed to create temp dir");

    let summary = write_site_with(&catalog, out.path(), &SiteOptions::default())
        .expect("Failed to write site");

    // 6 module pages + 2 track indexes + 1 root index
    assert_eq!(summary.pages, 9);

    assert!(out.path().join("index.html").is_file());
    assert!(out.path().join("modules/microservices/index.html").is_file());
    assert!(
        out.path()
            .join("modules/microservices/advanced/bulkhead/index.html")
            .is_file()
    );
    assert!(
        out.path()
            .join("modules/security/basics/oauth2-flows/index.html")
            .is_file()
    );
    assert!(out.path().join("sitemap.xml").is_file());
}

#[test]
fn test_pages_reference_the_shipped_stylesheet() {
    let catalog = load_catalog(fixture_content()).unwrap();
    let out = TempDir::new().unwrap();
    write_site_with(&catalog, out.path(), &SiteOptions::default()).unwrap();

    let css_name = stylesheet_filename();
    assert!(out.path().join(&css_name).is_file(), "missing {}", css_name);

    let page = std::fs::read_to_string(
        out.path()
            .join("modules/microservices/advanced/circuit-breaker/index.html"),
    )
    .unwrap();
    assert!(page.contains(&format!("href=\"/{}\"", css_name)));
}

#[test]
fn test_sitemap_covers_every_registered_route() {
    let catalog = load_catalog(fixture_content()).unwrap();
    let out = TempDir::new().unwrap();
    write_site_with(
        &catalog,
        out.path(),
        &SiteOptions {
            base_url: Some("https://learn.example.com".into()),
        },
    )
    .unwrap();

    let sitemap = std::fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
    for route in catalog.routes() {
        let loc = format!("<loc>https://learn.example.com{}</loc>", route);
        assert!(sitemap.contains(&loc), "sitemap missing {}", loc);
    }
}

#[test]
fn test_bundle_matches_directory_build() {
    let catalog = load_catalog(fixture_content()).unwrap();

    let mut buffer = Cursor::new(Vec::new());
    BundleExporter::new()
        .export(&catalog, &mut buffer)
        .expect("Failed to export bundle");

    let mut archive = zip::ZipArchive::new(buffer).expect("Bundle should be a valid ZIP");
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();

    assert!(names.contains(&"index.html".to_string()));
    assert!(names.contains(&"modules/microservices/advanced/saga-pattern/index.html".to_string()));
    assert!(names.contains(&"sitemap.xml".to_string()));
    assert!(names.contains(&stylesheet_filename()));

    // One page read back should be a complete document.
    let mut page = String::new();
    archive
        .by_name("modules/security/basics/jwt-authentication/index.html")
        .unwrap()
        .read_to_string(&mut page)
        .unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("JWT Authentication"));
    assert!(page.trim_end().ends_with("</html>"));
}
