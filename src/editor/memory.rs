use std::ops::RangeInclusive;

use crate::document::{Descendant, Leaf, Mark, Marks, Node};

use super::EditorHandle;

/// Child indices from the top-level block down to a leaf.
pub type LeafPath = Vec<usize>;

/// Selection over leaves, addressed by their index in document order.
///
/// Selection is leaf-granular: a range always covers whole leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Collapsed cursor inside a leaf
    Caret(usize),
    /// Expanded selection from `anchor` to `focus`, both inclusive
    Range { anchor: usize, focus: usize },
}

impl Selection {
    /// Leaf indices covered, in document order.
    pub fn leaves(&self) -> RangeInclusive<usize> {
        match *self {
            Self::Caret(idx) => idx..=idx,
            Self::Range { anchor, focus } => anchor.min(focus)..=anchor.max(focus),
        }
    }

    /// The end that moves when the selection is extended.
    pub const fn focus(&self) -> usize {
        match *self {
            Self::Caret(idx) | Self::Range { focus: idx, .. } => idx,
        }
    }

    /// The end that stays put when the selection is extended.
    pub const fn anchor(&self) -> usize {
        match *self {
            Self::Caret(idx) | Self::Range { anchor: idx, .. } => idx,
        }
    }
}

/// In-memory editor handle.
///
/// Owns the node tree, a leaf-granular selection and the pending marks
/// applied to the next insertion. Moving the selection clears the pending
/// marks.
#[derive(Debug, Clone)]
pub struct MemoryEditor {
    children: Vec<Node>,
    leaf_paths: Vec<LeafPath>,
    selection: Option<Selection>,
    pending: Option<Marks>,
}

impl MemoryEditor {
    /// Create an editor over `children` with no selection.
    pub fn new(children: Vec<Node>) -> Self {
        let mut leaf_paths = Vec::new();
        for (idx, node) in children.iter().enumerate() {
            collect_leaf_paths(node, &mut vec![idx], &mut leaf_paths);
        }
        Self {
            children,
            leaf_paths,
            selection: None,
            pending: None,
        }
    }

    /// Number of leaves in the document.
    pub fn leaf_count(&self) -> usize {
        self.leaf_paths.len()
    }

    /// Leaf at a document-order index.
    pub fn leaf(&self, idx: usize) -> Option<&Leaf> {
        let path = self.leaf_paths.get(idx)?;
        leaf_at(&self.children, path)
    }

    fn leaf_mut(&mut self, idx: usize) -> Option<&mut Leaf> {
        let path = self.leaf_paths.get(idx)?;
        leaf_at_mut(&mut self.children, path)
    }

    /// Path of the leaf at a document-order index.
    pub fn leaf_path(&self, idx: usize) -> Option<&[usize]> {
        self.leaf_paths.get(idx).map(Vec::as_slice)
    }

    /// Document-order index of the leaf at `path`.
    pub fn leaf_index(&self, path: &[usize]) -> Option<usize> {
        self.leaf_paths.iter().position(|p| p == path)
    }

    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Marks that the next inserted text would receive, if overridden.
    pub const fn pending_marks(&self) -> Option<Marks> {
        self.pending
    }

    /// Whether the leaf at `idx` is inside the selection.
    pub fn is_selected(&self, idx: usize) -> bool {
        self.selection
            .is_some_and(|selection| selection.leaves().contains(&idx))
    }

    /// Marks in effect at the selection, the way a toggle would see them.
    pub fn active_marks(&self) -> Marks {
        match self.selection {
            Some(Selection::Range { anchor, focus }) => self
                .leaf(anchor.min(focus))
                .map(|leaf| leaf.marks)
                .unwrap_or_default(),
            Some(Selection::Caret(idx)) => self
                .pending
                .or_else(|| self.leaf(idx).map(|leaf| leaf.marks))
                .unwrap_or_default(),
            None => self.pending.unwrap_or_default(),
        }
    }

    /// Place a caret in the leaf at `idx`, clamped to the document.
    pub fn select_caret(&mut self, idx: usize) {
        let Some(idx) = self.clamp(idx) else { return };
        self.set_selection(Some(Selection::Caret(idx)));
    }

    /// Select whole leaves from `anchor` to `focus`, clamped to the document.
    pub fn select_range(&mut self, anchor: usize, focus: usize) {
        let (Some(anchor), Some(focus)) = (self.clamp(anchor), self.clamp(focus)) else {
            return;
        };
        self.set_selection(Some(Selection::Range { anchor, focus }));
    }

    pub fn deselect(&mut self) {
        self.set_selection(None);
    }

    /// Collapse to a caret one leaf to the left.
    pub fn move_left(&mut self) {
        let target = self
            .selection
            .map_or(0, |selection| selection.focus().saturating_sub(1));
        self.select_caret(target);
    }

    /// Collapse to a caret one leaf to the right.
    pub fn move_right(&mut self) {
        let target = self
            .selection
            .map_or(0, |selection| selection.focus().saturating_add(1));
        self.select_caret(target);
    }

    /// Extend the selection focus one leaf to the left.
    pub fn extend_left(&mut self) {
        match self.selection {
            Some(selection) => {
                self.select_range(selection.anchor(), selection.focus().saturating_sub(1));
            }
            None => self.select_range(0, 0),
        }
    }

    /// Extend the selection focus one leaf to the right.
    pub fn extend_right(&mut self) {
        match self.selection {
            Some(selection) => {
                self.select_range(selection.anchor(), selection.focus().saturating_add(1));
            }
            None => self.select_range(0, 0),
        }
    }

    fn set_selection(&mut self, selection: Option<Selection>) {
        if self.selection != selection {
            self.pending = None;
        }
        self.selection = selection;
    }

    fn clamp(&self, idx: usize) -> Option<usize> {
        let last = self.leaf_paths.len().checked_sub(1)?;
        Some(idx.min(last))
    }
}

impl EditorHandle for MemoryEditor {
    fn is_mark_active(&self, mark: Mark) -> bool {
        self.active_marks().contains(mark)
    }

    fn set_mark(&mut self, mark: Mark, active: bool) {
        match self.selection {
            Some(selection @ Selection::Range { .. }) => {
                for idx in selection.leaves() {
                    if let Some(leaf) = self.leaf_mut(idx) {
                        leaf.marks.set(mark, active);
                    }
                }
            }
            Some(Selection::Caret(_)) | None => {
                let mut marks = self.active_marks();
                marks.set(mark, active);
                self.pending = Some(marks);
            }
        }
    }

    fn children(&self) -> &[Node] {
        &self.children
    }
}

fn collect_leaf_paths(node: &Node, path: &mut Vec<usize>, out: &mut Vec<LeafPath>) {
    for (idx, child) in node.children.iter().enumerate() {
        path.push(idx);
        match child {
            Descendant::Element(inner) => collect_leaf_paths(inner, path, out),
            Descendant::Text(_) => out.push(path.clone()),
        }
        path.pop();
    }
}

fn leaf_at<'a>(children: &'a [Node], path: &[usize]) -> Option<&'a Leaf> {
    let (first, rest) = path.split_first()?;
    let mut node = children.get(*first)?;
    let (last, middle) = rest.split_last()?;
    for idx in middle {
        match node.children.get(*idx)? {
            Descendant::Element(inner) => node = inner,
            Descendant::Text(_) => return None,
        }
    }
    match node.children.get(*last)? {
        Descendant::Text(leaf) => Some(leaf),
        Descendant::Element(_) => None,
    }
}

fn leaf_at_mut<'a>(children: &'a mut [Node], path: &[usize]) -> Option<&'a mut Leaf> {
    let (first, rest) = path.split_first()?;
    let mut node = children.get_mut(*first)?;
    let (last, middle) = rest.split_last()?;
    for idx in middle {
        match node.children.get_mut(*idx)? {
            Descendant::Element(inner) => node = inner,
            Descendant::Text(_) => return None,
        }
    }
    match node.children.get_mut(*last)? {
        Descendant::Text(leaf) => Some(leaf),
        Descendant::Element(_) => None,
    }
}
