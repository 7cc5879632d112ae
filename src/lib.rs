//! # didact
//!
//! A static site compiler for tabbed curriculum catalogs.
//!
//! ## Features
//!
//! - Load JSON-authored content (modules, tracks, sequence tables)
//! - Render each module as a four-tab page (Content / Examples /
//!   Exercises / Resources) with Previous/Next footer navigation
//! - Derive navigation from one authoritative curriculum order
//! - Lint catalogs for authoring defects (broken nav links, leaked
//!   template placeholders, ragged tables, empty tabs)
//! - Export to a directory tree or a ZIP bundle
//!
//! ## Quick Start
//!
//! ```no_run
//! use didact::{load_catalog, write_site};
//!
//! let catalog = load_catalog("content").unwrap();
//! for defect in didact::lint::lint_catalog(&catalog) {
//!     eprintln!("warning: {defect}");
//! }
//! write_site(&catalog, "public").unwrap();
//! ```
//!
//! ## Working with Catalogs
//!
//! The [`Catalog`] struct is the central data type: tracks in display
//! order, the authoritative module sequence per track, and the route
//! table every link resolves against:
//!
//! ```
//! use didact::{Catalog, Module, Track};
//!
//! let mut catalog = Catalog::new("Spring Boot Curriculum");
//! let mut track = Track::new("microservices", "Microservices");
//! track.modules = vec!["bulkhead".into()];
//! catalog.add_track(track);
//!
//! catalog.insert_module(
//!     Module::new("bulkhead", "Bulkhead Pattern")
//!         .with_badge("Module 9.2")
//!         .with_summary("Isolate resources so one failure cannot sink the rest.")
//!         .with_subtrack("advanced"),
//! ).unwrap();
//!
//! assert_eq!(
//!     catalog.module_route("bulkhead").as_deref(),
//!     Some("/modules/microservices/advanced/bulkhead"),
//! );
//! ```

pub mod error;
pub mod export;
pub mod import;
pub mod lint;
pub mod model;
pub mod nav;
pub mod render;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use export::{BundleExporter, Exporter, write_site, write_site_with};
pub use import::load_catalog;
pub use model::{Catalog, Module, Track};
pub use render::render_page;
