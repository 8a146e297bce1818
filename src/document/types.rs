//! Core document types.

use std::fmt;
use std::str::FromStr;

/// A boolean formatting attribute applicable to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Underline,
}

impl Mark {
    /// All marks, in hotkey priority order.
    pub const ALL: [Self; 4] = [Self::Bold, Self::Italic, Self::Code, Self::Underline];

    /// Canonical mark name as stored on leaves.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Underline => "underline",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mark name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mark `{0}`")]
pub struct MarkParseError(pub String);

impl FromStr for Mark {
    type Err = MarkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mark| mark.name() == s)
            .ok_or_else(|| MarkParseError(s.to_string()))
    }
}

/// Set of marks active on a leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub underline: bool,
}

impl Marks {
    pub const fn none() -> Self {
        Self {
            bold: false,
            italic: false,
            code: false,
            underline: false,
        }
    }

    /// Build a mark set from a list of marks.
    pub fn from_marks(marks: &[Mark]) -> Self {
        let mut set = Self::none();
        for mark in marks {
            set.set(*mark, true);
        }
        set
    }

    pub const fn contains(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Code => self.code,
            Mark::Underline => self.underline,
        }
    }

    pub const fn set(&mut self, mark: Mark, active: bool) {
        match mark {
            Mark::Bold => self.bold = active,
            Mark::Italic => self.italic = active,
            Mark::Code => self.code = active,
            Mark::Underline => self.underline = active,
        }
    }

    /// Copy of this set with `mark` flipped.
    #[must_use]
    pub const fn toggled(mut self, mark: Mark) -> Self {
        let active = self.contains(mark);
        self.set(mark, !active);
        self
    }

    pub const fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.code || self.underline)
    }

    /// Active marks in [`Mark::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(|mark| self.contains(*mark))
    }
}

/// Heading level supported by the block renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Map a numeric level (1-4) to a heading level.
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            _ => None,
        }
    }

    pub const fn level(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
        }
    }
}

/// Discriminated block type of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Normal paragraph text
    Paragraph,
    /// Heading with level (1-4)
    Heading(HeadingLevel),
    /// Any other type, carried verbatim for the fallback renderer
    Other(String),
}

impl NodeKind {
    /// Classify a node type string.
    ///
    /// Unknown strings map to [`NodeKind::Other`]; parsing never fails.
    pub fn from_type(ty: &str) -> Self {
        if ty == "paragraph" {
            return Self::Paragraph;
        }
        let heading = match ty.as_bytes() {
            [b'h', digit @ b'1'..=b'4'] => HeadingLevel::from_level(digit - b'0'),
            _ => None,
        };
        heading.map_or_else(|| Self::Other(ty.to_string()), Self::Heading)
    }

    /// The type string this kind was parsed from.
    pub fn type_name(&self) -> &str {
        const HEADINGS: [&str; 4] = ["h1", "h2", "h3", "h4"];
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading(level) => HEADINGS[usize::from(level.level() - 1)],
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(ty: &str) -> Self {
        Self::from_type(ty)
    }
}

/// A run of text annotated with marks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    pub text: String,
    pub marks: Marks,
}

impl Leaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::none(),
        }
    }

    /// Builder-style mark setter.
    #[must_use]
    pub fn with(mut self, mark: Mark) -> Self {
        self.marks.set(mark, true);
        self
    }
}

/// A child of a node: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descendant {
    Element(Node),
    Text(Leaf),
}

impl From<Node> for Descendant {
    fn from(node: Node) -> Self {
        Self::Element(node)
    }
}

impl From<Leaf> for Descendant {
    fn from(leaf: Leaf) -> Self {
        Self::Text(leaf)
    }
}

/// A block-level document element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Descendant>,
}

impl Node {
    pub fn new(kind: impl Into<NodeKind>) -> Self {
        Self {
            kind: kind.into(),
            children: Vec::new(),
        }
    }

    pub fn paragraph() -> Self {
        Self::new(NodeKind::Paragraph)
    }

    pub fn heading(level: HeadingLevel) -> Self {
        Self::new(NodeKind::Heading(level))
    }

    /// Append a child and return the node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Descendant>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a plain text leaf.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Leaf::new(text))
    }

    /// Concatenated text of all leaves below this node.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Descendant::Element(node) => out.push_str(&node.plain_text()),
                Descendant::Text(leaf) => out.push_str(&leaf.text),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_from_known_types() {
        assert_eq!(NodeKind::from_type("paragraph"), NodeKind::Paragraph);
        assert_eq!(
            NodeKind::from_type("h1"),
            NodeKind::Heading(HeadingLevel::H1)
        );
        assert_eq!(
            NodeKind::from_type("h4"),
            NodeKind::Heading(HeadingLevel::H4)
        );
    }

    #[test]
    fn test_node_kind_unknown_types_are_other() {
        assert_eq!(NodeKind::from_type("h5"), NodeKind::Other("h5".to_string()));
        assert_eq!(NodeKind::from_type(""), NodeKind::Other(String::new()));
        assert_eq!(
            NodeKind::from_type("Paragraph"),
            NodeKind::Other("Paragraph".to_string())
        );
        for ty in ["h0", "h01", "h+1", "H1"] {
            assert_eq!(NodeKind::from_type(ty), NodeKind::Other(ty.to_string()));
        }
    }

    #[test]
    fn test_node_kind_type_name_matches_source() {
        for ty in ["paragraph", "h1", "h2", "h3", "h4", "blockquote"] {
            assert_eq!(NodeKind::from_type(ty).type_name(), ty);
        }
    }

    #[test]
    fn test_heading_level_bounds() {
        assert_eq!(HeadingLevel::from_level(0), None);
        assert_eq!(HeadingLevel::from_level(3), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_level(5), None);
        assert_eq!(HeadingLevel::H2.level(), 2);
    }

    #[test]
    fn test_mark_names_parse() {
        for mark in Mark::ALL {
            assert_eq!(mark.name().parse::<Mark>(), Ok(mark));
        }
        assert_eq!(
            "strike".parse::<Mark>(),
            Err(MarkParseError("strike".to_string()))
        );
    }

    #[test]
    fn test_marks_set_and_contains() {
        let mut marks = Marks::none();
        assert!(marks.is_empty());
        marks.set(Mark::Code, true);
        assert!(marks.contains(Mark::Code));
        assert!(!marks.contains(Mark::Bold));
        marks.set(Mark::Code, false);
        assert!(marks.is_empty());
    }

    #[test]
    fn test_marks_toggled_flips_single_mark() {
        let marks = Marks::from_marks(&[Mark::Bold]);
        let toggled = marks.toggled(Mark::Italic);
        assert!(toggled.bold);
        assert!(toggled.italic);
        assert_eq!(toggled.toggled(Mark::Italic), marks);
    }

    #[test]
    fn test_marks_iter_uses_fixed_order() {
        let marks = Marks::from_marks(&[Mark::Underline, Mark::Bold]);
        assert_eq!(
            marks.iter().collect::<Vec<_>>(),
            vec![Mark::Bold, Mark::Underline]
        );
    }

    #[test]
    fn test_plain_text_walks_nested_children() {
        let node = Node::new("blockquote")
            .child(Node::paragraph().text("a").child(Leaf::new("b").with(Mark::Bold)))
            .text("c");
        assert_eq!(node.plain_text(), "abc");
    }
}
