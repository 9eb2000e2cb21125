//! Addressing nodes inside a fragment
//!
//! A path is the list of child indices from the fragment root down to a
//! node, so `[1, 0]` is the first child of the second root node. Paths
//! order lexicographically in document order.

use crate::node::Node;

pub type NodePath = Vec<usize>;

pub fn node_at<'a>(roots: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut node = roots.get(*first)?;
    for index in rest {
        node = node.children().get(*index)?;
    }
    Some(node)
}

pub fn node_at_mut<'a>(roots: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    let mut node = roots.get_mut(*first)?;
    for index in rest {
        node = node.children_mut()?.get_mut(*index)?;
    }
    Some(node)
}

/// Child list of the node at `parent`; the empty path means the roots
pub fn children_at_mut<'a>(roots: &'a mut Vec<Node>, parent: &[usize]) -> Option<&'a mut Vec<Node>> {
    if parent.is_empty() {
        return Some(roots);
    }
    node_at_mut(roots, parent)?.children_mut()
}

pub fn parent_of(path: &[usize]) -> &[usize] {
    match path.split_last() {
        Some((_, parent)) => parent,
        None => &[],
    }
}

/// True when `ancestor` is a strict prefix of `path`
pub fn is_ancestor(ancestor: &[usize], path: &[usize]) -> bool {
    ancestor.len() < path.len() && path.starts_with(ancestor)
}

/// Paths of the nearest-to-root first, ending with `path` itself
pub fn ancestors_and_self(path: &[usize]) -> impl DoubleEndedIterator<Item = &[usize]> {
    (1..=path.len()).map(move |len| &path[..len])
}

/// Every block that holds inline content, in document order.
///
/// Containers made only of blocks (`ul`, `blockquote`, a `div` of
/// paragraphs) are descended into rather than reported. A block mixing
/// inline content with nested blocks, such as a list item holding a
/// sub-list, is reported itself and then descended into.
pub fn leaf_blocks(roots: &[Node]) -> Vec<NodePath> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    collect_leaf_blocks(roots, &mut path, &mut out);
    out
}

fn collect_leaf_blocks(nodes: &[Node], path: &mut NodePath, out: &mut Vec<NodePath>) {
    for (index, node) in nodes.iter().enumerate() {
        if !node.is_block() {
            continue;
        }
        path.push(index);

        let has_blocks = node.has_block_children();
        let has_inline = node
            .children()
            .iter()
            .any(|child| !child.is_block() && !child.is_blank_text() && !matches!(child, Node::Comment { .. }));

        if !has_blocks || has_inline {
            out.push(path.clone());
        }
        if has_blocks {
            collect_leaf_blocks(node.children(), path, out);
        }

        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fragment;

    #[test]
    fn test_node_lookup() {
        let roots = parse_fragment("<p>a</p><ul><li>b</li><li>c</li></ul>").unwrap();
        assert_eq!(node_at(&roots, &[1, 1]).map(Node::text_content), Some("c".to_string()));
        assert!(node_at(&roots, &[]).is_none());
        assert!(node_at(&roots, &[3]).is_none());
    }

    #[test]
    fn test_node_lookup_mut() {
        let mut roots = parse_fragment("<ul><li>b</li></ul>").unwrap();
        node_at_mut(&mut roots, &[0, 0]).unwrap().set_tag("p");
        assert!(roots[0].children()[0].is_element("p"));

        let children = children_at_mut(&mut roots, &[]).unwrap();
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_leaf_blocks_document_order() {
        let roots = parse_fragment(
            "<h1>t</h1><blockquote><p>q1</p><p>q2</p></blockquote><ul><li>a<ul><li>b</li></ul></li></ul>",
        )
        .unwrap();

        assert_eq!(
            leaf_blocks(&roots),
            vec![vec![0], vec![1, 0], vec![1, 1], vec![2, 0], vec![2, 0, 1, 0]]
        );
    }

    #[test]
    fn test_leaf_blocks_skip_root_inline() {
        let roots = parse_fragment("loose<p>x</p>\n<p></p>").unwrap();
        assert_eq!(leaf_blocks(&roots), vec![vec![1], vec![3]]);
    }

    #[test]
    fn test_path_relations() {
        assert_eq!(parent_of(&[2, 0, 1]), &[2, 0]);
        assert_eq!(parent_of(&[]), &[] as &[usize]);
        assert!(is_ancestor(&[2], &[2, 0]));
        assert!(!is_ancestor(&[2], &[2]));
        assert!(!is_ancestor(&[1], &[2, 0]));

        let chain: Vec<&[usize]> = ancestors_and_self(&[3, 1]).collect();
        assert_eq!(chain, vec![&[3][..], &[3, 1][..]]);
    }
}
