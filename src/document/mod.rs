//! Document model: blocks, leaves and marks.
//!
//! This module handles:
//! - Block node types and their classification from type strings
//! - Text leaves and their formatting marks
//! - The built-in demo document

mod sample;
mod types;

pub use sample::sample;
pub use types::{Descendant, HeadingLevel, Leaf, Mark, MarkParseError, Marks, Node, NodeKind};
