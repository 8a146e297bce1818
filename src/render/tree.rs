use crate::document::{Descendant, Node};

use super::{Attributes, EditorConfig, RenderElementProps, RenderLeafProps, View};

/// Render every top-level block through `config`, bottom-up.
///
/// Children are rendered before their parent, as a reconciler would.
/// `leaf_attributes` lets the host decorate each leaf, e.g. with selection
/// state; element attributes carry the node path.
pub fn render_tree<F>(config: &EditorConfig, nodes: &[Node], leaf_attributes: F) -> Vec<View>
where
    F: Fn(&[usize]) -> Attributes,
{
    let mut path = Vec::new();
    nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            path.push(idx);
            let view = render_node(config, node, &mut path, &leaf_attributes);
            path.pop();
            view
        })
        .collect()
}

fn render_node<F>(
    config: &EditorConfig,
    node: &Node,
    path: &mut Vec<usize>,
    leaf_attributes: &F,
) -> View
where
    F: Fn(&[usize]) -> Attributes,
{
    let mut children = Vec::with_capacity(node.children.len());
    for (idx, child) in node.children.iter().enumerate() {
        path.push(idx);
        let view = match child {
            Descendant::Element(inner) => render_node(config, inner, path, leaf_attributes),
            Descendant::Text(leaf) => config.render_leaf(RenderLeafProps {
                leaf,
                children: View::text(leaf.text.clone()),
                attributes: leaf_attributes(path),
            }),
        };
        path.pop();
        children.push(view);
    }
    config.render_element(RenderElementProps {
        element: node,
        children,
        attributes: Attributes::element(path),
    })
}
