//! Core data model for curriculum content.
//!
//! This module contains:
//! - The content schema for a module page (header, four tab payloads)
//! - The catalog (tracks, sequence tables, route registry)
//! - Reference parsing for resource links and legacy nav fields

mod catalog;
mod module;
mod refs;

pub use catalog::{Catalog, Track};
pub use module::{
    Block, Card, CodeSample, Definition, Difficulty, ExerciseCard, Module, ResourceKind,
    ResourceLink, Section, Tab, Table,
};
pub use refs::ModuleRef;
