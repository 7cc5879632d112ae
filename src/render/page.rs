//! Page shell rendering.
//!
//! Pure functions from catalog data to complete HTML documents. No I/O
//! happens here; the export layer decides where the documents go.
//!
//! Every module page has the same shape: header block (badge, title,
//! summary), the four-tab layout, and Previous/Next footer navigation.

use std::fmt::Write;

use crate::model::{Catalog, Module, ModuleRef, ResourceKind, Tab, Track};
use crate::nav::PageNav;

use super::blocks;
use super::css;
use super::escape::{escape_attr, escape_html};

/// Render a complete module page.
///
/// Deterministic function of its inputs: the same catalog, module, and
/// resolved navigation always produce the same document.
pub fn render_page(catalog: &Catalog, module: &Module, nav: &PageNav) -> String {
    let mut out = String::with_capacity(16 * 1024);
    open_document(&mut out, &module.title, catalog.title());

    // Header block
    out.push_str("<header class=\"module-header\">\n");
    writeln!(out, "  <span class=\"badge\">{}</span>", escape_html(&module.badge)).unwrap();
    writeln!(out, "  <h1>{}</h1>", escape_html(&module.title)).unwrap();
    writeln!(out, "  <p class=\"summary\">{}</p>", escape_html(&module.summary)).unwrap();
    out.push_str("</header>\n<main>\n");

    // Tab list: four fixed triggers, always in the same order
    out.push_str("<nav class=\"tab-list\">\n");
    for tab in Tab::ALL {
        writeln!(
            out,
            "  <a class=\"tab-trigger\" href=\"#{}\">{}</a>",
            tab.anchor(),
            tab.label()
        )
        .unwrap();
    }
    out.push_str("</nav>\n");

    for tab in Tab::ALL {
        writeln!(out, "<section class=\"tab-panel\" id=\"{}\">", tab.anchor()).unwrap();
        match tab {
            Tab::Content => write_content(&mut out, module),
            Tab::Examples => write_examples(&mut out, module),
            Tab::Exercises => write_exercises(&mut out, module),
            Tab::Resources => write_resources(&mut out, catalog, module),
        }
        out.push_str("</section>\n");
    }

    out.push_str("</main>\n<footer class=\"module-footer\">\n<nav class=\"pager\">\n");
    writeln!(
        out,
        "  <a class=\"button prev\" href=\"{}\">Previous: {}</a>",
        escape_attr(&nav.prev.route),
        escape_html(&nav.prev.label)
    )
    .unwrap();
    writeln!(
        out,
        "  <a class=\"button next\" href=\"{}\">Next: {}</a>",
        escape_attr(&nav.next.route),
        escape_html(&nav.next.label)
    )
    .unwrap();
    out.push_str("</nav>\n</footer>\n");

    close_document(&mut out);
    out
}

fn write_content(out: &mut String, module: &Module) {
    for section in &module.sections {
        out.push_str("<section class=\"content-section\">\n");
        writeln!(out, "<h2>{}</h2>", escape_html(&section.heading)).unwrap();
        for block in &section.body {
            blocks::write_block(out, block);
        }
        out.push_str("</section>\n");
    }
}

fn write_examples(out: &mut String, module: &Module) {
    for sample in &module.examples {
        blocks::write_code_sample(out, sample);
    }
}

fn write_exercises(out: &mut String, module: &Module) {
    // Fixed display order: Beginner, Intermediate, Advanced. The sort
    // is stable, so authored order within a tier is preserved.
    let mut cards: Vec<_> = module.exercises.iter().collect();
    cards.sort_by_key(|c| c.difficulty);

    for card in cards {
        writeln!(
            out,
            "<article class=\"card exercise {}\">",
            card.difficulty.to_string().to_ascii_lowercase()
        )
        .unwrap();
        writeln!(out, "  <h3 class=\"card-title\">{}</h3>", escape_html(&card.title)).unwrap();
        writeln!(out, "  <span class=\"badge difficulty\">{}</span>", card.difficulty).unwrap();
        out.push_str("  <ol class=\"steps\">\n");
        for step in &card.steps {
            writeln!(out, "    <li>{}</li>", escape_html(step)).unwrap();
        }
        out.push_str("  </ol>\n</article>\n");
    }
}

fn write_resources(out: &mut String, catalog: &Catalog, module: &Module) {
    out.push_str("<ul class=\"resource-list\">\n");
    for link in &module.resources {
        writeln!(out, "  <li class=\"resource {}\">", link.kind.class()).unwrap();
        let href = match link.kind {
            ResourceKind::RelatedModule => ModuleRef::parse(&link.href).resolve(catalog),
            _ => Some(link.href.clone()),
        };
        match href {
            Some(href) => writeln!(
                out,
                "    <a href=\"{}\">{}</a>",
                escape_attr(&href),
                escape_html(&link.label)
            )
            .unwrap(),
            // Unresolvable sibling ref: render the label without a dead
            // link. The linter reports the broken ref.
            None => writeln!(
                out,
                "    <span class=\"resource-missing\">{}</span>",
                escape_html(&link.label)
            )
            .unwrap(),
        }
        out.push_str("  </li>\n");
    }
    out.push_str("</ul>\n");
}

/// Render a track index page: the track's modules in curriculum order.
pub fn render_track_index(catalog: &Catalog, track: &Track) -> String {
    let mut out = String::with_capacity(4 * 1024);
    open_document(&mut out, &track.title, catalog.title());

    out.push_str("<header class=\"module-header\">\n");
    writeln!(out, "  <h1>{}</h1>", escape_html(&track.title)).unwrap();
    out.push_str("</header>\n<main>\n<ul class=\"module-list\">\n");
    for id in &track.modules {
        let Some(module) = catalog.module(id) else {
            continue;
        };
        let Some(route) = catalog.module_route(id) else {
            continue;
        };
        out.push_str("  <li>\n");
        writeln!(out, "    <span class=\"badge\">{}</span>", escape_html(&module.badge)).unwrap();
        writeln!(
            out,
            "    <a href=\"{}\">{}</a>",
            escape_attr(&route),
            escape_html(&module.title)
        )
        .unwrap();
        writeln!(out, "    <span class=\"summary\">{}</span>", escape_html(&module.summary))
            .unwrap();
        out.push_str("  </li>\n");
    }
    out.push_str("</ul>\n</main>\n");

    close_document(&mut out);
    out
}

/// Render the site root: every track with its module listing.
pub fn render_site_index(catalog: &Catalog) -> String {
    let mut out = String::with_capacity(4 * 1024);
    open_document(&mut out, catalog.title(), catalog.title());

    out.push_str("<header class=\"module-header\">\n");
    writeln!(out, "  <h1>{}</h1>", escape_html(catalog.title())).unwrap();
    out.push_str("</header>\n<main>\n");
    for track in catalog.tracks() {
        writeln!(
            out,
            "<h2><a href=\"{}\">{}</a></h2>",
            escape_attr(&catalog.track_route(track)),
            escape_html(&track.title)
        )
        .unwrap();
        out.push_str("<ul class=\"module-list\">\n");
        for id in &track.modules {
            let (Some(module), Some(route)) = (catalog.module(id), catalog.module_route(id))
            else {
                continue;
            };
            writeln!(
                out,
                "  <li><a href=\"{}\">{}</a></li>",
                escape_attr(&route),
                escape_html(&module.title)
            )
            .unwrap();
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</main>\n");

    close_document(&mut out);
    out
}

fn open_document(out: &mut String, page_title: &str, site_title: &str) {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\"/>\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n");
    if page_title == site_title {
        writeln!(out, "  <title>{}</title>", escape_html(site_title)).unwrap();
    } else {
        writeln!(
            out,
            "  <title>{} | {}</title>",
            escape_html(page_title),
            escape_html(site_title)
        )
        .unwrap();
    }
    writeln!(out, "  <link rel=\"icon\" href=\"{}\"/>", escape_attr(&css::favicon_data_uri()))
        .unwrap();
    writeln!(
        out,
        "  <link rel=\"stylesheet\" href=\"{}\"/>",
        escape_attr(&css::stylesheet_route())
    )
    .unwrap();
    out.push_str("</head>\n<body>\n");
}

fn close_document(out: &mut String) {
    out.push_str("</body>\n</html>\n");
}
