//! Content schema for a single curriculum module.
//!
//! A module is the authored data behind one topic page: a header block
//! (title, badge, summary) plus the four tab payloads. The schema is
//! independent of rendering; pages are produced from it by the
//! [`render`](crate::render) module.

use serde::{Deserialize, Serialize};

/// The four fixed tabs of a module page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Content,
    Examples,
    Exercises,
    Resources,
}

impl Tab {
    /// All tabs in the order they appear in the tab list.
    pub const ALL: [Tab; 4] = [Tab::Content, Tab::Examples, Tab::Exercises, Tab::Resources];

    /// The visible tab label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Content => "Content",
            Tab::Examples => "Examples",
            Tab::Exercises => "Exercises",
            Tab::Resources => "Resources",
        }
    }

    /// The panel anchor id (`#content`, `#examples`, ...).
    pub fn anchor(self) -> &'static str {
        match self {
            Tab::Content => "content",
            Tab::Examples => "examples",
            Tab::Exercises => "exercises",
            Tab::Resources => "resources",
        }
    }
}

/// One topic's complete authored content.
///
/// Every module structurally carries all four tab payloads; an empty
/// vector is an authoring defect reported by [`lint`](crate::lint),
/// not a schema violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Module {
    /// Stable identifier, used as the last route segment.
    pub id: String,
    pub title: String,
    /// Badge label shown next to the title, e.g. "Module 9.2".
    pub badge: String,
    /// One-line description under the title.
    pub summary: String,
    /// Sub-grouping within the owning track, e.g. "advanced".
    /// Required for routing; catalog validation rejects empty values.
    #[serde(default)]
    pub subtrack: String,

    /// Authored prev/next refs carried over from the legacy source.
    /// Navigation is derived from the catalog sequence; these are kept
    /// only so the linter can flag where they disagree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub examples: Vec<CodeSample>,
    #[serde(default)]
    pub exercises: Vec<ExerciseCard>,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
}

impl Module {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_subtrack(mut self, subtrack: impl Into<String>) -> Self {
        self.subtrack = subtrack.into();
        self
    }

    /// Whether the given tab has any authored content.
    pub fn tab_is_empty(&self, tab: Tab) -> bool {
        match tab {
            Tab::Content => self.sections.is_empty(),
            Tab::Examples => self.examples.is_empty(),
            Tab::Exercises => self.exercises.is_empty(),
            Tab::Resources => self.resources.is_empty(),
        }
    }
}

/// A titled run of blocks inside the Content tab.
///
/// Insertion order is reading order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub body: Vec<Block>,
}

/// An atomic content block inside a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        text: String,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    /// Term/meaning pairs rendered as a definition list.
    Definitions {
        items: Vec<Definition>,
    },
    Table(Table),
    CodeBlock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },
    /// Best-practice style card grid.
    Cards {
        items: Vec<Card>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub term: String,
    pub meaning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

/// A comparison table: ordered headers, ordered rows of cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A non-executing, illustrative code snippet shown in the Examples tab
/// (or inline in a section via [`Block::CodeBlock`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSample {
    pub caption: String,
    /// Display-only language hint ("java", "yaml", "properties").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub code: String,
}

/// Practice-exercise difficulty tiers, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

/// An ordered task list at one difficulty tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCard {
    pub title: String,
    pub difficulty: Difficulty,
    pub steps: Vec<String>,
}

/// Kinds of curated resource links in the Resources tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Doc,
    Book,
    Article,
    /// Link to a sibling module; `href` holds a module ref, not a URL.
    RelatedModule,
}

impl ResourceKind {
    /// CSS class suffix for styling the resource entry.
    pub fn class(self) -> &'static str {
        match self {
            ResourceKind::Doc => "doc",
            ResourceKind::Book => "book",
            ResourceKind::Article => "article",
            ResourceKind::RelatedModule => "related-module",
        }
    }
}

/// A curated external link or related-module pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    /// URL for external kinds; module ref for [`ResourceKind::RelatedModule`].
    pub href: String,
    pub kind: ResourceKind,
}
