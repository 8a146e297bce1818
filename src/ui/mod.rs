//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`style`]: Theming and colors
//! - Projection of the rendered view tree onto styled terminal lines
//! - Status bar and help overlay

pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{block_line, document_lines, render};
pub use status::status_text;

pub const DOCUMENT_LEFT_PADDING: u16 = 2;

#[cfg(test)]
mod tests;
