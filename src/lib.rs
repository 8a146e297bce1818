// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. input::KeyBindings)
    clippy::module_name_repetitions
)]

//! # Marksmith
//!
//! Formatting hotkeys and render selectors for a rich-text editing surface.
//!
//! The editor itself (document, selection, marks) is owned by a host and
//! reached through [`editor::EditorHandle`]. This crate supplies the three
//! entry points a host wires up:
//! - a key handler mapping `mod+b`/`mod+i`/`mod+c`/`mod+u` to mark toggles
//! - a block renderer choosing a container per node type
//! - a leaf renderer nesting one wrapper per active mark
//!
//! ## Architecture
//!
//! The terminal host uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`config`]: Saved flag defaults
//! - [`document`]: Node, leaf and mark types
//! - [`editor`]: Editor handle seam and the in-memory handle
//! - [`input`]: Chords and formatting key bindings
//! - [`logging`]: Tracing subscriber setup
//! - [`render`]: Block and leaf render selectors
//! - [`ui`]: Terminal projection of rendered views

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{Leaf, Mark, Marks, Node, NodeKind};
    pub use crate::editor::{EditorHandle, MemoryEditor, toggle_mark};
    pub use crate::input::{KeyBindings, PrimaryModifier};
    pub use crate::render::{EditorConfig, View, render_tree};
}
