//! Render selectors: block types to containers, marks to wrappers.
//!
//! Both selectors are pure projections of the node or leaf handed in.
//! They never touch the editor handle. [`EditorConfig`] bundles them with
//! the key dispatcher as the three entry points a host wires up.

mod tree;
mod view;

pub use tree::render_tree;
pub use view::{Attributes, Tag, View};

use crossterm::event::KeyEvent;

use crate::document::{Leaf, Mark, Node, NodeKind};
use crate::editor::EditorHandle;
use crate::input::{KeyBindings, PrimaryModifier};

/// Order in which mark wrappers are applied to a leaf.
///
/// Each present mark wraps everything produced so far, so the first entry
/// ends up innermost.
pub const LEAF_WRAP_ORDER: [Mark; 4] = [Mark::Bold, Mark::Code, Mark::Italic, Mark::Underline];

/// Input to the block renderer.
#[derive(Debug, Clone)]
pub struct RenderElementProps<'a> {
    pub element: &'a Node,
    /// Already rendered children
    pub children: Vec<View>,
    pub attributes: Attributes,
}

/// Input to the leaf renderer.
#[derive(Debug, Clone)]
pub struct RenderLeafProps<'a> {
    pub leaf: &'a Leaf,
    /// Already rendered text content
    pub children: View,
    pub attributes: Attributes,
}

/// Host-supplied renderer for block types without a dedicated container.
pub type FallbackRenderer = fn(RenderElementProps<'_>) -> View;

/// The host's generic block container.
pub fn default_element(props: RenderElementProps<'_>) -> View {
    View::element(Tag::Div, props.attributes, props.children)
}

/// Render a block node to its container.
///
/// Paragraphs and headings h1-h4 get their own container. Every other
/// type goes to `fallback`.
pub fn render_element(props: RenderElementProps<'_>, fallback: FallbackRenderer) -> View {
    let tag = match props.element.kind {
        NodeKind::Paragraph => Tag::Paragraph,
        NodeKind::Heading(level) => Tag::Heading(level),
        NodeKind::Other(_) => return fallback(props),
    };
    View::element(tag, props.attributes, props.children)
}

/// Render a leaf, nesting one wrapper per active mark.
///
/// Wrappers follow [`LEAF_WRAP_ORDER`] whatever order the marks were set
/// in. The outer span carries the caller's attributes.
pub fn render_leaf(props: RenderLeafProps<'_>) -> View {
    let mut el = props.children;
    for mark in LEAF_WRAP_ORDER {
        if props.leaf.marks.contains(mark) {
            el = el.wrap(mark_tag(mark));
        }
    }
    View::element(Tag::Span, props.attributes, vec![el])
}

const fn mark_tag(mark: Mark) -> Tag {
    match mark {
        Mark::Bold => Tag::Strong,
        Mark::Code => Tag::Code,
        Mark::Italic => Tag::Em,
        Mark::Underline => Tag::Underline,
    }
}

/// Entry points handed to the host: key handler, block and leaf renderers.
#[derive(Clone)]
pub struct EditorConfig {
    bindings: KeyBindings,
    fallback: FallbackRenderer,
}

impl EditorConfig {
    pub fn new(primary: PrimaryModifier) -> Self {
        Self {
            bindings: KeyBindings::new(primary),
            fallback: default_element,
        }
    }

    /// Replace the key bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Replace the renderer used for unknown block types.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackRenderer) -> Self {
        self.fallback = fallback;
        self
    }

    pub const fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn on_key_down<E: EditorHandle + ?Sized>(&self, editor: &mut E, event: &KeyEvent) -> bool {
        self.bindings.on_key_down(editor, event)
    }

    pub fn render_element(&self, props: RenderElementProps<'_>) -> View {
        render_element(props, self.fallback)
    }

    pub fn render_leaf(&self, props: RenderLeafProps<'_>) -> View {
        render_leaf(props)
    }
}

impl std::fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorConfig")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new(PrimaryModifier::default())
    }
}
