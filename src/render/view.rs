//! Visual tree produced by the render selectors.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::document::HeadingLevel;

/// Visual container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Paragraph,
    Heading(HeadingLevel),
    /// Generic block container used by the default renderer
    Div,
    /// Attribute-bearing outer wrapper of a leaf
    Span,
    Strong,
    Code,
    Em,
    Underline,
}

impl Tag {
    /// Markup name of the tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading(HeadingLevel::H1) => "h1",
            Self::Heading(HeadingLevel::H2) => "h2",
            Self::Heading(HeadingLevel::H3) => "h3",
            Self::Heading(HeadingLevel::H4) => "h4",
            Self::Div => "div",
            Self::Span => "span",
            Self::Strong => "strong",
            Self::Code => "code",
            Self::Em => "em",
            Self::Underline => "u",
        }
    }
}

/// Positional and accessibility metadata a host attaches to a node.
///
/// Forwarded verbatim by the render selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub const DATA_NODE: &'static str = "data-node";
    pub const DATA_LEAF: &'static str = "data-leaf";
    pub const DATA_PATH: &'static str = "data-path";
    pub const DATA_SELECTED: &'static str = "data-selected";

    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Attributes for a block element at `path`.
    pub fn element(path: &[usize]) -> Self {
        Self::new()
            .with(Self::DATA_NODE, "element")
            .with(Self::DATA_PATH, format_path(path))
    }

    /// Attributes for a leaf at `path`.
    pub fn leaf(path: &[usize]) -> Self {
        Self::new()
            .with(Self::DATA_LEAF, "true")
            .with(Self::DATA_PATH, format_path(path))
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// A node in the visual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Element {
        tag: Tag,
        attributes: Attributes,
        children: Vec<View>,
    },
    Text(String),
}

impl View {
    pub const fn element(tag: Tag, attributes: Attributes, children: Vec<Self>) -> Self {
        Self::Element {
            tag,
            attributes,
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Wrap `child` in a bare `tag` element.
    #[must_use]
    pub fn wrap(self, tag: Tag) -> Self {
        Self::element(tag, Attributes::new(), vec![self])
    }

    pub const fn tag(&self) -> Option<Tag> {
        match self {
            Self::Element { tag, .. } => Some(*tag),
            Self::Text(_) => None,
        }
    }

    pub const fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Element { attributes, .. } => Some(attributes),
            Self::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Self::Element { children, .. } => {
                for child in children {
                    child.push_text(out);
                }
            }
            Self::Text(text) => out.push_str(text),
        }
    }

    /// Tags from this node down its first-child chain.
    ///
    /// For a rendered leaf this is the wrapper nesting, outermost first.
    pub fn tag_chain(&self) -> Vec<Tag> {
        let mut tags = Vec::new();
        let mut current = self;
        while let Self::Element { tag, children, .. } = current {
            tags.push(*tag);
            match children.first() {
                Some(child) => current = child,
                None => break,
            }
        }
        tags
    }

    /// HTML-like serialization, used in logs and tests.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Self::Element {
                tag,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag.name());
                for (key, value) in attributes.iter() {
                    let _ = write!(out, " {key}=\"{}\"", escape(value));
                }
                out.push('>');
                for child in children {
                    child.write_markup(out);
                }
                let _ = write!(out, "</{}>", tag.name());
            }
            Self::Text(text) => out.push_str(&escape(text)),
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_helpers_encode_path() {
        let attrs = Attributes::leaf(&[2, 0, 1]);
        assert_eq!(attrs.get(Attributes::DATA_PATH), Some("2.0.1"));
        assert_eq!(attrs.get(Attributes::DATA_LEAF), Some("true"));
        assert!(!attrs.contains(Attributes::DATA_NODE));
    }

    #[test]
    fn test_markup_is_ordered_and_escaped() {
        let view = View::element(
            Tag::Paragraph,
            Attributes::new().with("b", "2").with("a", "\"1\""),
            vec![View::text("x < y & z")],
        );
        assert_eq!(
            view.to_markup(),
            "<p a=\"&quot;1&quot;\" b=\"2\">x &lt; y &amp; z</p>"
        );
    }

    #[test]
    fn test_tag_chain_follows_first_child() {
        let view = View::text("X").wrap(Tag::Strong).wrap(Tag::Underline);
        assert_eq!(view.tag_chain(), vec![Tag::Underline, Tag::Strong]);
        assert_eq!(view.text_content(), "X");
    }
}
