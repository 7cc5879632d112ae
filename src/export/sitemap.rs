//! Sitemap generation.
//!
//! The sitemap is small, fixed-shape XML, so it is synthesized
//! directly rather than going through an XML writer. Paths are
//! percent-encoded per the sitemap protocol.

use std::fmt::Write;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::model::Catalog;
use crate::render::escape_html;

/// Characters that must be percent-encoded in a URL path.
const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?');

/// Build `sitemap.xml` for every registered route.
pub fn build_sitemap(catalog: &Catalog, base_url: Option<&str>) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    let prefix = base_url.map(|b| b.trim_end_matches('/')).unwrap_or("");
    for route in catalog.routes() {
        let encoded = utf8_percent_encode(&route, PATH_SET).to_string();
        writeln!(
            xml,
            "  <url><loc>{}{}</loc></url>",
            escape_html(prefix),
            escape_html(&encoded)
        )
        .unwrap();
    }

    xml.push_str("</urlset>\n");
    xml
}
