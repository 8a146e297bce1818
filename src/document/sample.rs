//! Built-in demo document shown by the terminal host.

use super::types::{HeadingLevel, Leaf, Mark, Node};

/// The document opened when the editor starts.
///
/// Covers every block type the renderer knows, plus one it doesn't, so the
/// fallback container is visible on screen.
pub fn sample() -> Vec<Node> {
    vec![
        Node::heading(HeadingLevel::H1).text("Marksmith"),
        Node::paragraph()
            .text("Select a run of text and press ")
            .child(Leaf::new("mod+b").with(Mark::Code))
            .text(" for ")
            .child(Leaf::new("bold").with(Mark::Bold))
            .text(", ")
            .child(Leaf::new("mod+i").with(Mark::Code))
            .text(" for ")
            .child(Leaf::new("italic").with(Mark::Italic))
            .text("."),
        Node::heading(HeadingLevel::H2).text("Marks nest"),
        Node::paragraph()
            .child(
                Leaf::new("bold code underline")
                    .with(Mark::Bold)
                    .with(Mark::Code)
                    .with(Mark::Underline),
            )
            .text(" always nests the same way, whatever order it was applied in."),
        Node::heading(HeadingLevel::H3).text("Without a selection"),
        Node::paragraph()
            .text("A caret toggle sets the marks for the ")
            .child(Leaf::new("next").with(Mark::Italic))
            .text(" inserted text."),
        Node::heading(HeadingLevel::H4).text("Fallback"),
        Node::new("blockquote").text("Unknown block types use the default container."),
    ]
}
