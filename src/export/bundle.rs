//! ZIP bundle export.
//!
//! Packages the same file set a directory build produces into a single
//! deflated archive, written to any `Write + Seek` destination.

use std::io::{Seek, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::model::Catalog;

use super::site::{SiteOptions, site_files};
use super::Exporter;

/// Exports a catalog as a ZIP site bundle.
#[derive(Debug, Clone, Default)]
pub struct BundleExporter {
    options: SiteOptions,
}

impl BundleExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SiteOptions) -> Self {
        Self { options }
    }
}

impl Exporter for BundleExporter {
    fn export<W: Write + Seek>(&self, catalog: &Catalog, writer: &mut W) -> Result<()> {
        let files = site_files(catalog, &self.options)?;

        let mut zip = ZipWriter::new(writer);
        let options_deflate =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (path, data) in &files {
            zip.start_file(path, options_deflate)?;
            zip.write_all(data)?;
        }

        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Module, Track};
    use std::io::Cursor;

    #[test]
    fn test_bundle_contains_site_files() {
        let mut catalog = Catalog::new("Curriculum");
        let mut track = Track::new("security", "Security");
        track.modules = vec!["oauth2-flows".into()];
        catalog.add_track(track);
        catalog
            .insert_module(
                Module::new("oauth2-flows", "OAuth2 Flows")
                    .with_badge("Module 5.2")
                    .with_subtrack("basics"),
            )
            .unwrap();

        let mut buffer = Cursor::new(Vec::new());
        BundleExporter::new().export(&catalog, &mut buffer).unwrap();

        let mut archive = zip::ZipArchive::new(buffer).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"index.html".to_string()));
        assert!(names.contains(&"modules/security/basics/oauth2-flows/index.html".to_string()));
        assert!(names.contains(&"sitemap.xml".to_string()));
        assert!(names.iter().any(|n| n.starts_with("style.") && n.ends_with(".css")));

        let mut page = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("modules/security/basics/oauth2-flows/index.html").unwrap(),
            &mut page,
        )
        .unwrap();
        assert!(page.contains("OAuth2 Flows"));
    }
}
