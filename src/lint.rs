//! Authoring-defect detection.
//!
//! There is no runtime error taxonomy in a rendered site; everything
//! that can go wrong is an authoring-time defect. This module catches
//! the ones observed in the legacy source: self-referencing and
//! mismatched prev/next links, template placeholders leaking into
//! prose, truncated headings, ragged tables, out-of-order exercise
//! tiers, and empty tabs.
//!
//! Defects never abort a build; they are reported so content owners
//! can fix the source. `didact --check` turns them into a failing
//! exit code for CI.

use std::fmt;

use memchr::memmem::Finder;

use crate::model::{Block, Catalog, Module, ModuleRef, ResourceKind, Tab};
use crate::nav;

/// Which legacy nav field a defect refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavField {
    Prev,
    Next,
}

impl fmt::Display for NavField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NavField::Prev => "previous",
            NavField::Next => "next",
        })
    }
}

/// A single authoring defect found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// A legacy nav field points at the module itself.
    SelfLink { module: String, field: NavField },
    /// A legacy nav field targets a module that does not exist.
    UnknownNavTarget {
        module: String,
        field: NavField,
        target: String,
    },
    /// A legacy nav field disagrees with the authoritative sequence.
    SequenceMismatch {
        module: String,
        field: NavField,
        authored: String,
        derived: Option<String>,
    },
    /// Authored A.next = B, but B.prev does not point back at A.
    AsymmetricChain {
        module: String,
        next: String,
        back: Option<String>,
    },
    /// A tab has no authored content.
    EmptyTab { module: String, tab: Tab },
    /// A table row's cell count differs from the header count.
    RaggedTable {
        module: String,
        section: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Exercise cards authored out of difficulty order.
    ExerciseOrder { module: String },
    /// A template placeholder (`${...}`, `{{...}}`) left in prose.
    PlaceholderLeak {
        module: String,
        context: String,
        placeholder: String,
    },
    /// A heading that looks cut off mid-phrase.
    SuspiciousHeading { module: String, heading: String },
    /// A related-module resource that resolves to no registered page.
    UnknownRelatedModule { module: String, target: String },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::SelfLink { module, field } => {
                write!(f, "module '{module}': authored {field} link points at the module itself")
            }
            Defect::UnknownNavTarget {
                module,
                field,
                target,
            } => {
                write!(f, "module '{module}': authored {field} link targets unknown '{target}'")
            }
            Defect::SequenceMismatch {
                module,
                field,
                authored,
                derived,
            } => match derived {
                Some(derived) => write!(
                    f,
                    "module '{module}': authored {field} is '{authored}' but the sequence says '{derived}'"
                ),
                None => write!(
                    f,
                    "module '{module}': authored {field} is '{authored}' but the module is at the end of its chain"
                ),
            },
            Defect::AsymmetricChain { module, next, back } => match back {
                Some(back) => write!(
                    f,
                    "module '{module}': next is '{next}' but '{next}' lists previous as '{back}'"
                ),
                None => write!(
                    f,
                    "module '{module}': next is '{next}' but '{next}' has no previous link back"
                ),
            },
            Defect::EmptyTab { module, tab } => {
                write!(f, "module '{module}': {} tab has no content", tab.label())
            }
            Defect::RaggedTable {
                module,
                section,
                row,
                expected,
                found,
            } => write!(
                f,
                "module '{module}', section '{section}': table row {row} has {found} cells, expected {expected}"
            ),
            Defect::ExerciseOrder { module } => {
                write!(
                    f,
                    "module '{module}': exercises are not in Beginner, Intermediate, Advanced order"
                )
            }
            Defect::PlaceholderLeak {
                module,
                context,
                placeholder,
            } => write!(
                f,
                "module '{module}': unresolved placeholder '{placeholder}' in {context}"
            ),
            Defect::SuspiciousHeading { module, heading } => {
                write!(f, "module '{module}': heading '{heading}' looks truncated")
            }
            Defect::UnknownRelatedModule { module, target } => {
                write!(f, "module '{module}': related-module resource '{target}' is not registered")
            }
        }
    }
}

/// Lint the whole catalog, module by module in curriculum order.
pub fn lint_catalog(catalog: &Catalog) -> Vec<Defect> {
    let mut defects = Vec::new();
    for module in catalog.modules_in_order() {
        lint_module(catalog, module, &mut defects);
    }
    defects
}

/// Lint one module against the catalog.
pub fn lint_module(catalog: &Catalog, module: &Module, defects: &mut Vec<Defect>) {
    check_legacy_nav(catalog, module, defects);
    check_tabs(module, defects);
    check_sections(module, defects);
    check_exercises(module, defects);
    check_resources(catalog, module, defects);
    check_placeholders(module, defects);
}

fn check_legacy_nav(catalog: &Catalog, module: &Module, defects: &mut Vec<Defect>) {
    let (derived_prev, derived_next) = nav::neighbors(catalog, &module.id);

    let fields = [
        (NavField::Prev, module.prev.as_deref(), derived_prev),
        (NavField::Next, module.next.as_deref(), derived_next),
    ];

    for (field, authored, derived) in fields {
        let Some(raw) = authored else { continue };

        let target = match ModuleRef::parse(raw) {
            ModuleRef::Module(id) => id,
            // Routed and external refs in nav fields never matched the
            // sequence; flag them as unknown targets.
            _ => {
                defects.push(Defect::UnknownNavTarget {
                    module: module.id.clone(),
                    field,
                    target: raw.to_string(),
                });
                continue;
            }
        };

        if target == module.id {
            defects.push(Defect::SelfLink {
                module: module.id.clone(),
                field,
            });
            continue;
        }

        if catalog.module(&target).is_none() {
            defects.push(Defect::UnknownNavTarget {
                module: module.id.clone(),
                field,
                target,
            });
            continue;
        }

        if derived != Some(target.as_str()) {
            defects.push(Defect::SequenceMismatch {
                module: module.id.clone(),
                field,
                authored: target.clone(),
                derived: derived.map(str::to_string),
            });
        }

        // Symmetry of the authored chain: A.next = B requires B.prev = A.
        if field == NavField::Next
            && let Some(next_module) = catalog.module(&target)
        {
            let back = next_module
                .prev
                .as_deref()
                .and_then(|raw| ModuleRef::parse(raw).as_module().map(str::to_string));
            if back.as_deref() != Some(module.id.as_str()) {
                defects.push(Defect::AsymmetricChain {
                    module: module.id.clone(),
                    next: target,
                    back,
                });
            }
        }
    }
}

fn check_tabs(module: &Module, defects: &mut Vec<Defect>) {
    for tab in Tab::ALL {
        if module.tab_is_empty(tab) {
            defects.push(Defect::EmptyTab {
                module: module.id.clone(),
                tab,
            });
        }
    }
}

fn check_sections(module: &Module, defects: &mut Vec<Defect>) {
    for section in &module.sections {
        if heading_looks_truncated(&section.heading) {
            defects.push(Defect::SuspiciousHeading {
                module: module.id.clone(),
                heading: section.heading.clone(),
            });
        }

        for block in &section.body {
            if let Block::Table(table) = block {
                for (row_index, row) in table.rows.iter().enumerate() {
                    if row.len() != table.headers.len() {
                        defects.push(Defect::RaggedTable {
                            module: module.id.clone(),
                            section: section.heading.clone(),
                            row: row_index,
                            expected: table.headers.len(),
                            found: row.len(),
                        });
                    }
                }
            }
        }
    }
}

fn check_exercises(module: &Module, defects: &mut Vec<Defect>) {
    let out_of_order = module
        .exercises
        .windows(2)
        .any(|pair| pair[0].difficulty > pair[1].difficulty);
    if out_of_order {
        defects.push(Defect::ExerciseOrder {
            module: module.id.clone(),
        });
    }
}

fn check_resources(catalog: &Catalog, module: &Module, defects: &mut Vec<Defect>) {
    for link in &module.resources {
        if link.kind == ResourceKind::RelatedModule
            && ModuleRef::parse(&link.href).resolve(catalog).is_none()
        {
            defects.push(Defect::UnknownRelatedModule {
                module: module.id.clone(),
                target: link.href.clone(),
            });
        }
    }
}

/// Scan prose for unresolved template placeholders.
///
/// Code blocks and code samples are exempt: `${server.port}` is
/// legitimate in a properties snippet, but not in a paragraph.
fn check_placeholders(module: &Module, defects: &mut Vec<Defect>) {
    let mut scan = |text: &str, context: &str, defects: &mut Vec<Defect>| {
        if let Some(placeholder) = find_placeholder(text) {
            defects.push(Defect::PlaceholderLeak {
                module: module.id.clone(),
                context: context.to_string(),
                placeholder,
            });
        }
    };

    scan(&module.summary, "summary", defects);

    for section in &module.sections {
        let context = format!("section '{}'", section.heading);
        for block in &section.body {
            match block {
                Block::Paragraph { text } => scan(text, &context, defects),
                Block::List { items, .. } => {
                    for item in items {
                        scan(item, &context, defects);
                    }
                }
                Block::Definitions { items } => {
                    for def in items {
                        scan(&def.term, &context, defects);
                        scan(&def.meaning, &context, defects);
                    }
                }
                Block::Table(table) => {
                    for cell in table.headers.iter().chain(table.rows.iter().flatten()) {
                        scan(cell, &context, defects);
                    }
                }
                Block::Cards { items } => {
                    for card in items {
                        scan(&card.title, &context, defects);
                        scan(&card.body, &context, defects);
                    }
                }
                Block::CodeBlock { .. } => {}
            }
        }
    }

    for card in &module.exercises {
        let context = format!("exercise '{}'", card.title);
        for step in &card.steps {
            scan(step, &context, defects);
        }
    }

    for link in &module.resources {
        scan(&link.label, "resource label", defects);
    }
}

/// Find the first `${...}` or `{{...}}` placeholder in prose text.
fn find_placeholder(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let dollar = Finder::new(b"${");
    let stache = Finder::new(b"{{");

    let start = match (dollar.find(bytes), stache.find(bytes)) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let tail = &text[start..];
    match tail.find('}') {
        Some(i) => {
            // Include the doubled brace of a {{...}} placeholder.
            let end = if tail.as_bytes().get(i + 1) == Some(&b'}') {
                i + 2
            } else {
                i + 1
            };
            Some(tail[..end].to_string())
        }
        // Unclosed placeholder: report a short snippet.
        None => Some(tail.chars().take(24).collect()),
    }
}

/// Heuristic for headings cut off mid-phrase, as seen in the legacy
/// source (e.g. a class name truncated at the end of a heading).
fn heading_looks_truncated(heading: &str) -> bool {
    let trimmed = heading.trim_end();
    trimmed.ends_with('-')
        || trimmed.ends_with('(')
        || trimmed.ends_with(',')
        || trimmed.ends_with(':')
        || trimmed.ends_with("&&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, ExerciseCard, Module, ResourceLink, Section, Table, Track};

    fn filled_module(id: &str, title: &str) -> Module {
        let mut module = Module::new(id, title)
            .with_badge("Module 9.x")
            .with_summary("A summary.")
            .with_subtrack("advanced");
        module.sections.push(Section {
            heading: "Overview".into(),
            body: vec![Block::Paragraph {
                text: "Prose.".into(),
            }],
        });
        module.examples.push(crate::model::CodeSample {
            caption: "Config".into(),
            language: Some("yaml".into()),
            code: "server:\n  port: 8080".into(),
        });
        module.exercises.push(ExerciseCard {
            title: "Warm up".into(),
            difficulty: Difficulty::Beginner,
            steps: vec!["Read the overview.".into()],
        });
        module.resources.push(ResourceLink {
            label: "Spring docs".into(),
            href: "https://docs.spring.io".into(),
            kind: ResourceKind::Doc,
        });
        module
    }

    fn catalog_with(modules: Vec<Module>) -> Catalog {
        let mut catalog = Catalog::new("Curriculum");
        let mut track = Track::new("microservices", "Microservices");
        track.modules = modules.iter().map(|m| m.id.clone()).collect();
        catalog.add_track(track);
        for module in modules {
            catalog.insert_module(module).unwrap();
        }
        catalog
    }

    #[test]
    fn test_clean_catalog_has_no_defects() {
        let catalog = catalog_with(vec![
            filled_module("bulkhead", "Bulkhead Pattern"),
            filled_module("circuit-breaker", "Circuit Breaker"),
        ]);
        assert_eq!(lint_catalog(&catalog), Vec::new());
    }

    #[test]
    fn test_self_link_is_flagged() {
        let mut bulkhead = filled_module("bulkhead", "Bulkhead Pattern");
        bulkhead.next = Some("bulkhead".into());
        let catalog = catalog_with(vec![
            bulkhead,
            filled_module("circuit-breaker", "Circuit Breaker"),
        ]);
        let defects = lint_catalog(&catalog);
        assert!(defects.contains(&Defect::SelfLink {
            module: "bulkhead".into(),
            field: NavField::Next,
        }));
    }

    #[test]
    fn test_sequence_mismatch_is_flagged() {
        let mut bulkhead = filled_module("bulkhead", "Bulkhead Pattern");
        bulkhead.next = Some("saga".into());
        let catalog = catalog_with(vec![
            bulkhead,
            filled_module("circuit-breaker", "Circuit Breaker"),
            filled_module("saga", "Saga Pattern"),
        ]);
        let defects = lint_catalog(&catalog);
        assert!(defects.iter().any(|d| matches!(
            d,
            Defect::SequenceMismatch { module, .. } if module == "bulkhead"
        )));
    }

    #[test]
    fn test_asymmetric_chain_is_flagged() {
        let mut a = filled_module("bulkhead", "Bulkhead Pattern");
        a.next = Some("circuit-breaker".into());
        let mut b = filled_module("circuit-breaker", "Circuit Breaker");
        b.prev = Some("saga".into());
        let catalog = catalog_with(vec![a, b, filled_module("saga", "Saga Pattern")]);
        let defects = lint_catalog(&catalog);
        assert!(defects.iter().any(|d| matches!(
            d,
            Defect::AsymmetricChain { module, next, .. }
                if module == "bulkhead" && next == "circuit-breaker"
        )));
    }

    #[test]
    fn test_symmetric_authored_chain_is_not_flagged() {
        let mut a = filled_module("bulkhead", "Bulkhead Pattern");
        a.next = Some("circuit-breaker".into());
        let mut b = filled_module("circuit-breaker", "Circuit Breaker");
        b.prev = Some("bulkhead".into());
        let catalog = catalog_with(vec![a, b]);
        let defects = lint_catalog(&catalog);
        assert!(!defects.iter().any(|d| matches!(d, Defect::AsymmetricChain { .. })));
    }

    #[test]
    fn test_empty_tab_is_flagged() {
        let mut module = filled_module("bulkhead", "Bulkhead Pattern");
        module.resources.clear();
        let catalog = catalog_with(vec![module]);
        let defects = lint_catalog(&catalog);
        assert!(defects.contains(&Defect::EmptyTab {
            module: "bulkhead".into(),
            tab: Tab::Resources,
        }));
    }

    #[test]
    fn test_ragged_table_is_flagged() {
        let mut module = filled_module("bulkhead", "Bulkhead Pattern");
        module.sections.push(Section {
            heading: "Comparison".into(),
            body: vec![Block::Table(Table {
                headers: vec!["Pattern".into(), "Purpose".into()],
                rows: vec![vec!["Bulkhead".into()]],
            })],
        });
        let catalog = catalog_with(vec![module]);
        let defects = lint_catalog(&catalog);
        assert!(defects.iter().any(|d| matches!(
            d,
            Defect::RaggedTable { expected: 2, found: 1, .. }
        )));
    }

    #[test]
    fn test_exercise_order_is_flagged() {
        let mut module = filled_module("bulkhead", "Bulkhead Pattern");
        module.exercises = vec![
            ExerciseCard {
                title: "Hard".into(),
                difficulty: Difficulty::Advanced,
                steps: vec!["x".into()],
            },
            ExerciseCard {
                title: "Easy".into(),
                difficulty: Difficulty::Beginner,
                steps: vec!["y".into()],
            },
        ];
        let catalog = catalog_with(vec![module]);
        let defects = lint_catalog(&catalog);
        assert!(defects.contains(&Defect::ExerciseOrder {
            module: "bulkhead".into()
        }));
    }

    #[test]
    fn test_placeholder_in_prose_is_flagged() {
        let mut module = filled_module("bulkhead", "Bulkhead Pattern");
        module.sections[0].body.push(Block::Paragraph {
            text: "Set the name to ${app.name} in production.".into(),
        });
        let catalog = catalog_with(vec![module]);
        let defects = lint_catalog(&catalog);
        assert!(defects.iter().any(|d| matches!(
            d,
            Defect::PlaceholderLeak { placeholder, .. } if placeholder == "${app.name}"
        )));
    }

    #[test]
    fn test_placeholder_in_code_is_allowed() {
        let mut module = filled_module("bulkhead", "Bulkhead Pattern");
        module.sections[0].body.push(Block::CodeBlock {
            language: Some("properties".into()),
            code: "spring.application.name=${APP_NAME}".into(),
        });
        let catalog = catalog_with(vec![module]);
        let defects = lint_catalog(&catalog);
        assert!(!defects.iter().any(|d| matches!(d, Defect::PlaceholderLeak { .. })));
    }

    #[test]
    fn test_truncated_heading_is_flagged() {
        let mut module = filled_module("bulkhead", "Bulkhead Pattern");
        module.sections.push(Section {
            heading: "Configuring ThreadPoolBulkhead-".into(),
            body: vec![Block::Paragraph { text: "x".into() }],
        });
        let catalog = catalog_with(vec![module]);
        let defects = lint_catalog(&catalog);
        assert!(defects.iter().any(|d| matches!(d, Defect::SuspiciousHeading { .. })));
    }

    #[test]
    fn test_unknown_related_module_is_flagged() {
        let mut module = filled_module("bulkhead", "Bulkhead Pattern");
        module.resources.push(ResourceLink {
            label: "See also".into(),
            href: "module:rate-limiter".into(),
            kind: ResourceKind::RelatedModule,
        });
        let catalog = catalog_with(vec![module]);
        let defects = lint_catalog(&catalog);
        assert!(defects.contains(&Defect::UnknownRelatedModule {
            module: "bulkhead".into(),
            target: "module:rate-limiter".into(),
        }));
    }
}
