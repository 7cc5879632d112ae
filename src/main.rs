//! didact - static curriculum-site compiler

use std::process::ExitCode;

use clap::Parser;

use didact::export::{BundleExporter, Exporter, SiteOptions, write_site_with};
use didact::lint::lint_catalog;
use didact::nav;
use didact::render::{render_page, verify};
use didact::{Catalog, load_catalog};

#[derive(Parser)]
#[command(name = "didact")]
#[command(version, about = "Static curriculum-site compiler", long_about = None)]
#[command(after_help = "EXAMPLES:
    didact content/ public/          Compile the site into public/
    didact content/ site.zip --bundle  Compile into a ZIP bundle
    didact content/ --check          Lint and verify without writing
    didact -i content/               Show catalog summary")]
struct Cli {
    /// Content directory (catalog.json + modules/)
    #[arg(value_name = "CONTENT")]
    content: String,

    /// Output directory (or ZIP path with --bundle)
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["info", "check"])]
    output: Option<String>,

    /// Show catalog summary without compiling
    #[arg(short, long)]
    info: bool,

    /// Lint and verify the catalog; exit nonzero on defects
    #[arg(long)]
    check: bool,

    /// Write a ZIP bundle instead of a directory tree
    #[arg(long)]
    bundle: bool,

    /// Absolute site prefix for sitemap entries
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.info {
        show_info(&cli.content)
    } else if cli.check {
        check(&cli.content)
    } else {
        // Clap guarantees output is present here.
        let Some(output) = cli.output.as_deref() else {
            eprintln!("error: output path required");
            return ExitCode::FAILURE;
        };
        compile(&cli, output)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_info(content: &str) -> didact::Result<ExitCode> {
    let catalog = load_catalog(content)?;

    println!("Site: {}", catalog.title());
    println!("Tracks: {}", catalog.tracks().len());
    println!("Modules: {}", catalog.len());
    for track in catalog.tracks() {
        println!("  {} ({} modules)", track.title, track.modules.len());
        for id in &track.modules {
            if let Some(module) = catalog.module(id) {
                println!("    {} - {}", module.badge, module.title);
            }
        }
    }
    println!("Routes: {}", catalog.routes().len());

    Ok(ExitCode::SUCCESS)
}

fn check(content: &str) -> didact::Result<ExitCode> {
    let catalog = load_catalog(content)?;

    let defects = lint_catalog(&catalog);
    for defect in &defects {
        eprintln!("warning: {defect}");
    }

    // Render every page and re-parse it to confirm the shell invariants.
    for module in catalog.modules_in_order() {
        let page_nav = nav::resolve(&catalog, &module.id)?;
        let html = render_page(&catalog, module, &page_nav);
        verify::check_page(&html)?;
    }

    if defects.is_empty() {
        println!("ok: {} modules, no defects", catalog.len());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{} defect(s) found", defects.len());
        Ok(ExitCode::FAILURE)
    }
}

fn compile(cli: &Cli, output: &str) -> didact::Result<ExitCode> {
    let catalog = load_catalog(&cli.content)?;

    if !cli.quiet {
        for defect in lint_catalog(&catalog) {
            eprintln!("warning: {defect}");
        }
    }

    let options = SiteOptions {
        base_url: cli.base_url.clone(),
    };

    if cli.bundle {
        write_bundle(&catalog, output, &options)?;
    } else {
        let summary = write_site_with(&catalog, output, &options)?;
        if !cli.quiet {
            println!(
                "Compiled {} pages ({} files) into {}",
                summary.pages, summary.files, output
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.quiet {
        println!("Compiled {} modules into bundle {}", catalog.len(), output);
    }
    Ok(ExitCode::SUCCESS)
}

fn write_bundle(catalog: &Catalog, output: &str, options: &SiteOptions) -> didact::Result<()> {
    let mut file = std::fs::File::create(output)?;
    BundleExporter::with_options(options.clone()).export(catalog, &mut file)
}
