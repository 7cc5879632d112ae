//! Linting the fixture catalog and hand-built defective catalogs.

use didact::lint::{Defect, lint_catalog};
use didact::load_catalog;
use didact::model::{
    Block, Catalog, CodeSample, Difficulty, ExerciseCard, Module, ResourceKind, ResourceLink,
    Section, Table, Track,
};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_content() -> String {
    format!("{}/content", FIXTURES_DIR)
}

#[test]
fn test_fixture_catalog_has_exactly_the_known_defect() {
    let catalog = load_catalog(fixture_content()).expect("Failed to load fixture catalog");
    let defects = lint_catalog(&catalog);

    // The only authoring defect carried over from the legacy source is
    // bulkhead's self-referencing Next link.
    assert_eq!(defects.len(), 1, "unexpected defects: {:?}", defects);
    assert!(matches!(&defects[0], Defect::SelfLink { module, .. } if module == "bulkhead"));
}

fn module_with_all_tabs(id: &str, title: &str) -> Module {
    let mut module = Module::new(id, title)
        .with_badge("Module 1.1")
        .with_summary("Summary.")
        .with_subtrack("basics");
    module.sections.push(Section {
        heading: "Overview".into(),
        body: vec![Block::Paragraph {
            text: "Prose.".into(),
        }],
    });
    module.examples.push(CodeSample {
        caption: "Sample".into(),
        language: Some("properties".into()),
        code: "server.port=8080".into(),
    });
    module.exercises.push(ExerciseCard {
        title: "Try it".into(),
        difficulty: Difficulty::Beginner,
        steps: vec!["Do the thing.".into()],
    });
    module.resources.push(ResourceLink {
        label: "Docs".into(),
        href: "https://docs.spring.io".into(),
        kind: ResourceKind::Doc,
    });
    module
}

fn single_track_catalog(modules: Vec<Module>) -> Catalog {
    let mut catalog = Catalog::new("Test Curriculum");
    let mut track = Track::new("testing", "Testing");
    track.modules = modules.iter().map(|m| m.id.clone()).collect();
    catalog.add_track(track);
    for module in modules {
        catalog.insert_module(module).unwrap();
    }
    catalog
}

#[test]
fn test_placeholder_leak_in_table_cell() {
    let mut module = module_with_all_tabs("config", "Configuration");
    module.sections.push(Section {
        heading: "Properties".into(),
        body: vec![Block::Table(Table {
            headers: vec!["Property".into(), "Value".into()],
            rows: vec![vec!["app name".into(), "${spring.application.name}".into()]],
        })],
    });
    let defects = lint_catalog(&single_track_catalog(vec![module]));

    assert!(defects.iter().any(|d| matches!(
        d,
        Defect::PlaceholderLeak { placeholder, .. } if placeholder == "${spring.application.name}"
    )));
}

#[test]
fn test_mustache_placeholder_in_summary() {
    let mut module = module_with_all_tabs("config", "Configuration");
    module.summary = "Configure {{serviceName}} for production.".into();
    let defects = lint_catalog(&single_track_catalog(vec![module]));

    assert!(defects.iter().any(|d| matches!(
        d,
        Defect::PlaceholderLeak { context, placeholder, .. }
            if context == "summary" && placeholder == "{{serviceName}}"
    )));
}

#[test]
fn test_properties_snippets_may_contain_placeholders() {
    // Placeholders in code samples are the point of the sample.
    let catalog = load_catalog(fixture_content()).unwrap();
    let defects = lint_catalog(&catalog);
    assert!(!defects.iter().any(|d| matches!(d, Defect::PlaceholderLeak { .. })));
}

#[test]
fn test_empty_examples_tab_is_reported() {
    let mut module = module_with_all_tabs("sparse", "Sparse Module");
    module.examples.clear();
    let defects = lint_catalog(&single_track_catalog(vec![module]));

    assert!(defects.iter().any(|d| matches!(d, Defect::EmptyTab { .. })));
}

#[test]
fn test_defect_messages_are_readable() {
    let mut module = module_with_all_tabs("bulkhead", "Bulkhead Pattern");
    module.next = Some("bulkhead".into());
    let defects = lint_catalog(&single_track_catalog(vec![module]));

    let messages: Vec<String> = defects.iter().map(|d| d.to_string()).collect();
    assert!(
        messages
            .iter()
            .any(|m| m.contains("bulkhead") && m.contains("points at the module itself")),
        "messages: {:?}",
        messages
    );
}

#[test]
fn test_unknown_nav_target_reported_for_route_refs() {
    let mut module = module_with_all_tabs("gateway", "Gateway");
    module.prev = Some("/modules/unknown/path".into());
    let defects = lint_catalog(&single_track_catalog(vec![module]));

    assert!(defects.iter().any(|d| matches!(d, Defect::UnknownNavTarget { .. })));
}
