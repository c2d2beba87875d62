//! Core engine for podlift: extracts POD documentation markup from
//! source-code comments and turns it into HTML plus a transitive
//! dependency graph.
//!
//! The pipeline is file → comment-syntax adapter → instruction parser →
//! instruction list → { HTML renderer, dependency resolver }.

pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod syntax;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use models::{Dependency, Document};
pub use parsing::Instruction;
pub use render::{RenderOptions, render};
pub use syntax::{AdapterRegistry, CommentSyntax, RegistryError};
