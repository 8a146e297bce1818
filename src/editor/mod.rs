//! Editor handle seam.
//!
//! The document, selection and mark state live behind [`EditorHandle`],
//! owned by the host. The adapter only queries it and issues mark
//! commands through it. [`MemoryEditor`] is the in-process handle used by
//! the terminal host.

mod memory;

pub use memory::{LeafPath, MemoryEditor, Selection};

use crate::document::{Mark, Node};

/// Capability interface onto an externally owned editor.
pub trait EditorHandle {
    /// Whether `mark` is active in the current selection or context.
    fn is_mark_active(&self, mark: Mark) -> bool;

    /// Set `mark` on the current selection, or on the marks used for the
    /// next insertion when there is no expanded selection.
    fn set_mark(&mut self, mark: Mark, active: bool);

    /// Live top-level block nodes.
    fn children(&self) -> &[Node];
}

/// Flip `mark` over the current selection.
///
/// Query-then-set: the new state is the opposite of what the handle
/// reports as active.
pub fn toggle_mark<E: EditorHandle + ?Sized>(editor: &mut E, mark: Mark) {
    let active = editor.is_mark_active(mark);
    tracing::debug!(%mark, active, "toggle mark");
    editor.set_mark(mark, !active);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Leaf;

    fn editor() -> MemoryEditor {
        MemoryEditor::new(vec![
            Node::paragraph()
                .child(Leaf::new("one"))
                .child(Leaf::new("two").with(Mark::Bold)),
        ])
    }

    #[test]
    fn test_toggle_mark_adds_missing_mark_to_range() {
        let mut ed = editor();
        ed.select_range(0, 1);
        toggle_mark(&mut ed, Mark::Italic);
        assert!(ed.leaf(0).unwrap().marks.italic);
        assert!(ed.leaf(1).unwrap().marks.italic);
    }

    #[test]
    fn test_toggle_mark_twice_restores_state() {
        let mut ed = editor();
        ed.select_range(1, 1);
        toggle_mark(&mut ed, Mark::Bold);
        assert!(!ed.leaf(1).unwrap().marks.bold);
        toggle_mark(&mut ed, Mark::Bold);
        assert!(ed.leaf(1).unwrap().marks.bold);
    }

    #[test]
    fn test_toggle_mark_through_trait_object() {
        let mut ed = editor();
        ed.select_caret(1);
        let handle: &mut dyn EditorHandle = &mut ed;
        toggle_mark(handle, Mark::Bold);
        assert!(!handle.is_mark_active(Mark::Bold));
    }
}
