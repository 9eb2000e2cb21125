//! Tree edits behind the in-memory engine's commands
//!
//! Every function takes the document roots and the selected leaf-block
//! paths (document order, from [`path::leaf_blocks`]). Functions that
//! change the block structure work through the paths back to front so
//! earlier paths stay valid.

use std::collections::BTreeMap;

use custom_editor_dom::path::{self, NodePath};
use custom_editor_dom::{tags, Node};

pub const BOLD_TAGS: [&str; 2] = ["b", "strong"];
pub const ITALIC_TAGS: [&str; 2] = ["i", "em"];

/// Whether every non-blank text in the inline content of `block` sits
/// inside an element named in `names`. Blocks without text never match.
pub fn inline_fully_in(block: &Node, names: &[&str]) -> bool {
    let mut seen_text = false;
    let all_inside = block
        .children()
        .iter()
        .filter(|child| !child.is_block())
        .all(|child| text_inside(child, names, false, &mut seen_text));
    all_inside && seen_text
}

fn text_inside(node: &Node, names: &[&str], inside: bool, seen_text: &mut bool) -> bool {
    match node {
        Node::Text { content } => {
            if content.trim().is_empty() {
                true
            } else {
                *seen_text = true;
                inside
            }
        }
        Node::Element { children, .. } => {
            let inside = inside || names.iter().any(|name| node.is_element(name));
            children
                .iter()
                .all(|child| text_inside(child, names, inside, seen_text))
        }
        Node::Comment { .. } => true,
    }
}

/// Whether the selection at `leaf` is inside an element named `name`
pub fn has_format_at(roots: &[Node], leaf: &[usize], name: &str) -> bool {
    let in_ancestor = path::ancestors_and_self(leaf)
        .any(|ancestor| path::node_at(roots, ancestor).is_some_and(|node| node.is_element(name)));
    in_ancestor || path::node_at(roots, leaf).is_some_and(|block| inline_fully_in(block, &[name]))
}

/// Wrap the inline content of each selected block in `wrapper`, first
/// removing any existing `equivalents` so formats do not nest
pub fn apply_inline(roots: &mut [Node], paths: &[NodePath], wrapper: &str, equivalents: &[&str]) {
    for leaf in paths {
        let Some(block) = path::node_at_mut(roots, leaf) else {
            continue;
        };
        if inline_fully_in(block, equivalents) {
            continue;
        }
        unwrap_inline(block, &|node| equivalents.iter().any(|name| node.is_element(name)));
        wrap_inline_runs(block, wrapper);
    }
}

/// Remove inline elements matching `names` from each selected block
pub fn remove_inline(roots: &mut [Node], paths: &[NodePath], names: &[&str]) {
    for leaf in paths {
        if let Some(block) = path::node_at_mut(roots, leaf) {
            unwrap_inline(block, &|node| names.iter().any(|name| node.is_element(name)));
        }
    }
}

/// Strip every inline element except void ones (`br`, `img`)
pub fn clear_inline(roots: &mut [Node], paths: &[NodePath]) {
    for leaf in paths {
        if let Some(block) = path::node_at_mut(roots, leaf) {
            unwrap_inline(block, &|node| node.tag().is_some_and(|tag| !tags::is_void(tag)));
        }
    }
}

fn unwrap_inline(block: &mut Node, matches: &dyn Fn(&Node) -> bool) {
    let children = block.take_children();
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        if child.is_block() {
            out.push(child);
        } else {
            unwrap_nodes(child, matches, &mut out);
        }
    }
    if let Some(slot) = block.children_mut() {
        *slot = merge_text(out);
    }
}

fn unwrap_nodes(node: Node, matches: &dyn Fn(&Node) -> bool, out: &mut Vec<Node>) {
    match node {
        Node::Element { .. } if matches(&node) => {
            for child in node.into_children() {
                unwrap_nodes(child, matches, out);
            }
        }
        Node::Element {
            tag,
            attributes,
            children,
        } => {
            let mut inner = Vec::with_capacity(children.len());
            for child in children {
                unwrap_nodes(child, matches, &mut inner);
            }
            out.push(Node::Element {
                tag,
                attributes,
                children: merge_text(inner),
            });
        }
        other => out.push(other),
    }
}

fn merge_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let (Some(Node::Text { content }), Node::Text { content: next }) = (out.last_mut(), &node) {
            content.push_str(next);
            continue;
        }
        out.push(node);
    }
    out
}

fn wrap_inline_runs(block: &mut Node, wrapper: &str) {
    let children = block.take_children();
    let mut out = Vec::new();
    let mut run = Vec::new();
    for child in children {
        if child.is_block() {
            flush_run(&mut run, &mut out, |run| Node::element(wrapper).with_children(run));
            out.push(child);
        } else {
            run.push(child);
        }
    }
    flush_run(&mut run, &mut out, |run| Node::element(wrapper).with_children(run));
    if let Some(slot) = block.children_mut() {
        *slot = out;
    }
}

/// Move an inline run into `out`, wrapped by `wrap` unless it is blank
fn flush_run(run: &mut Vec<Node>, out: &mut Vec<Node>, wrap: impl FnOnce(Vec<Node>) -> Node) {
    if run.is_empty() {
        return;
    }
    let run = std::mem::take(run);
    if run.iter().all(|node| node.is_blank_text() || matches!(node, Node::Comment { .. })) {
        out.extend(run);
    } else {
        out.push(wrap(run));
    }
}

/// Turn a list item or quote into plain blocks: inline runs become
/// `block_tag` elements, nested blocks are kept. Never returns nothing,
/// so an empty item still leaves an empty block behind.
pub fn into_blocks(node: Node, block_tag: &str) -> Vec<Node> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    for child in node.into_children() {
        if child.is_block() {
            flush_run(&mut run, &mut out, |run| Node::element(block_tag).with_children(run));
            out.push(child);
        } else {
            run.push(child);
        }
    }
    flush_run(&mut run, &mut out, |run| Node::element(block_tag).with_children(run));
    out.retain(|node| !node.is_blank_text());
    if out.is_empty() {
        out.push(Node::element(block_tag));
    }
    out
}

fn parent_is_list(roots: &[Node], leaf: &[usize]) -> bool {
    path::node_at(roots, path::parent_of(leaf)).is_some_and(Node::is_list)
}

/// Selected list items grouped by the path of their list
fn items_by_list(roots: &[Node], paths: &[NodePath]) -> BTreeMap<NodePath, Vec<usize>> {
    let mut lists: BTreeMap<NodePath, Vec<usize>> = BTreeMap::new();
    for leaf in paths {
        let Some((index, list)) = leaf.split_last() else {
            continue;
        };
        if path::node_at(roots, leaf).is_some_and(|node| node.is_element("li")) && parent_is_list(roots, leaf) {
            lists.entry(list.to_vec()).or_default().push(*index);
        }
    }
    lists
}

/// Keep only paths that are not inside another path of the set
pub fn outermost(paths: &[NodePath]) -> Vec<NodePath> {
    paths
        .iter()
        .filter(|candidate| !paths.iter().any(|other| path::is_ancestor(other, candidate)))
        .cloned()
        .collect()
}

/// Convert selected blocks to list items of `list_tag`. Items already in
/// a list retag their list; neighbouring lists of the same tag merge.
pub fn make_list(roots: &mut Vec<Node>, paths: &[NodePath], list_tag: &str) {
    for leaf in paths.iter().rev() {
        if parent_is_list(roots, leaf) {
            if let Some(list) = path::node_at_mut(roots, path::parent_of(leaf)) {
                list.set_tag(list_tag);
            }
            continue;
        }
        let Some(block) = path::node_at_mut(roots, leaf) else {
            continue;
        };
        if block.is_element("li") {
            continue;
        }
        let content = block.take_children();
        *block = Node::element(list_tag).with_child(Node::element("li").with_children(content));
    }
    merge_adjacent_lists(roots);
}

fn merge_adjacent_lists(nodes: &mut Vec<Node>) {
    for node in nodes.iter_mut() {
        if let Some(children) = node.children_mut() {
            merge_adjacent_lists(children);
        }
    }

    let mut index = 0;
    while index + 1 < nodes.len() {
        let same_list = nodes[index].is_list() && nodes[index].tag() == nodes[index + 1].tag();
        if same_list {
            let next = nodes.remove(index + 1);
            if let Some(children) = nodes[index].children_mut() {
                children.extend(next.into_children());
            }
        } else {
            index += 1;
        }
    }
}

/// Replace every list touched by the selection with plain blocks
pub fn remove_list(roots: &mut Vec<Node>, paths: &[NodePath], block_tag: &str) {
    let lists = items_by_list(roots, paths);
    for list_path in lists.keys().rev() {
        let Some((index, parent)) = list_path.split_last() else {
            continue;
        };
        let Some(siblings) = path::children_at_mut(roots, parent) else {
            continue;
        };
        if *index >= siblings.len() {
            continue;
        }
        let list = siblings.remove(*index);
        let blocks: Vec<Node> = list
            .into_children()
            .into_iter()
            .filter(|item| !item.is_blank_text())
            .flat_map(|item| into_blocks(item, block_tag))
            .collect();
        siblings.splice(*index..*index, blocks);
    }
}

/// Nest each selected item under its previous sibling. Consecutive
/// selected items share the same nested list.
pub fn increase_list_level(roots: &mut Vec<Node>, paths: &[NodePath]) {
    let lists = items_by_list(roots, paths);
    for (list_path, selected) in lists.iter().rev() {
        let Some(list) = path::node_at_mut(roots, list_path) else {
            continue;
        };
        let list_tag = list.tag().unwrap_or("ul").to_string();
        let items = list.take_children();
        let mut out: Vec<Node> = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            let nest = selected.contains(&index) && out.last().is_some_and(|previous| previous.is_element("li"));
            if !nest {
                out.push(item);
            } else if let Some(previous) = out.last_mut() {
                nest_item(previous, item, &list_tag);
            }
        }

        if let Some(children) = list.children_mut() {
            *children = out;
        }
    }
}

fn nest_item(parent: &mut Node, item: Node, list_tag: &str) {
    let Some(children) = parent.children_mut() else {
        return;
    };
    match children.last_mut() {
        Some(last) if last.is_element(list_tag) => {
            if let Some(nested) = last.children_mut() {
                nested.push(item);
            }
        }
        _ => children.push(Node::element(list_tag).with_child(item)),
    }
}

/// Move each selected item one level out. Nested items rejoin the
/// enclosing list after their parent item; top-level items leave the list
/// as plain blocks, splitting it.
pub fn decrease_list_level(roots: &mut Vec<Node>, paths: &[NodePath], block_tag: &str) {
    let lists = items_by_list(roots, paths);
    for (list_path, selected) in lists.iter().rev() {
        let container = path::parent_of(list_path);
        let nested = !container.is_empty()
            && path::node_at(roots, container).is_some_and(|node| node.is_element("li"))
            && parent_is_list(roots, container);

        if nested {
            outdent_nested(roots, list_path, selected);
        } else {
            split_out_of_list(roots, list_path, selected, block_tag);
        }
    }
}

fn outdent_nested(roots: &mut Vec<Node>, list_path: &[usize], selected: &[usize]) {
    let Some(first) = selected.iter().min().copied() else {
        return;
    };
    let Some(list) = path::node_at_mut(roots, list_path) else {
        return;
    };
    let list_tag = list.tag().unwrap_or("ul").to_string();
    let mut items = list.take_children();
    let first = first.min(items.len());
    let tail = items.split_off(first);
    let list_now_empty = items.is_empty();
    if let Some(children) = list.children_mut() {
        *children = items;
    }

    // Unselected items after a lifted one stay nested under it
    let mut lifted: Vec<Node> = Vec::new();
    for (offset, item) in tail.into_iter().enumerate() {
        if selected.contains(&(first + offset)) || lifted.is_empty() {
            lifted.push(item);
        } else if let Some(previous) = lifted.last_mut() {
            nest_item(previous, item, &list_tag);
        }
    }

    let Some((list_index, item_path)) = list_path.split_last() else {
        return;
    };
    if list_now_empty {
        if let Some(parent_item) = path::node_at_mut(roots, item_path).and_then(Node::children_mut) {
            if *list_index < parent_item.len() {
                parent_item.remove(*list_index);
            }
        }
    }

    let Some((item_index, outer_list)) = item_path.split_last() else {
        return;
    };
    if let Some(outer_items) = path::node_at_mut(roots, outer_list).and_then(Node::children_mut) {
        let at = (*item_index + 1).min(outer_items.len());
        outer_items.splice(at..at, lifted);
    }
}

fn split_out_of_list(roots: &mut Vec<Node>, list_path: &[usize], selected: &[usize], block_tag: &str) {
    let Some((list_index, parent)) = list_path.split_last() else {
        return;
    };
    let Some(siblings) = path::children_at_mut(roots, parent) else {
        return;
    };
    if *list_index >= siblings.len() {
        return;
    }
    let list = siblings.remove(*list_index);
    let list_tag = list.tag().unwrap_or("ul").to_string();

    let mut replacement: Vec<Node> = Vec::new();
    let mut pending: Vec<Node> = Vec::new();
    for (index, item) in list.into_children().into_iter().enumerate() {
        if selected.contains(&index) {
            if !pending.is_empty() {
                replacement.push(Node::element(list_tag.as_str()).with_children(std::mem::take(&mut pending)));
            }
            replacement.extend(into_blocks(item, block_tag));
        } else {
            pending.push(item);
        }
    }
    if !pending.is_empty() {
        replacement.push(Node::element(list_tag.as_str()).with_children(pending));
    }

    siblings.splice(*list_index..*list_index, replacement);
}

/// Wrap the selected blocks of each container in a `blockquote`. List
/// items quote their whole list.
pub fn increase_quote_level(roots: &mut Vec<Node>, paths: &[NodePath]) {
    let targets: Vec<NodePath> = paths
        .iter()
        .map(|leaf| {
            if parent_is_list(roots, leaf) {
                path::parent_of(leaf).to_vec()
            } else {
                leaf.clone()
            }
        })
        .collect();

    let mut by_parent: BTreeMap<NodePath, (usize, usize)> = BTreeMap::new();
    for target in outermost(&targets) {
        let Some((index, parent)) = target.split_last() else {
            continue;
        };
        let range = by_parent.entry(parent.to_vec()).or_insert((*index, *index));
        range.0 = range.0.min(*index);
        range.1 = range.1.max(*index);
    }

    for (parent, (start, end)) in by_parent.iter().rev() {
        let Some(siblings) = path::children_at_mut(roots, parent) else {
            continue;
        };
        if *end >= siblings.len() {
            continue;
        }
        let quoted: Vec<Node> = siblings.drain(*start..=*end).collect();
        siblings.insert(*start, Node::element("blockquote").with_children(quoted));
    }
}

/// Unwrap the nearest `blockquote` around each selected block
pub fn decrease_quote_level(roots: &mut Vec<Node>, paths: &[NodePath], block_tag: &str) {
    let mut quotes: Vec<NodePath> = paths
        .iter()
        .filter_map(|leaf| {
            path::ancestors_and_self(leaf)
                .rev()
                .find(|ancestor| {
                    path::node_at(roots, ancestor).is_some_and(|node| node.is_element("blockquote"))
                })
                .map(<[usize]>::to_vec)
        })
        .collect();
    quotes.sort();
    quotes.dedup();

    for quote_path in quotes.iter().rev() {
        let Some((index, parent)) = quote_path.split_last() else {
            continue;
        };
        let Some(siblings) = path::children_at_mut(roots, parent) else {
            continue;
        };
        if *index >= siblings.len() {
            continue;
        }
        let quote = siblings.remove(*index);
        siblings.splice(*index..*index, into_blocks(quote, block_tag));
    }
}

/// Extract the outermost selected blocks, rewrite them, and put the
/// result where the first of them was. The extracted range reaches up to
/// the root: lists and quotes around the selection are split, so the new
/// blocks never end up inside them.
pub fn rewrite_blocks(
    roots: &mut Vec<Node>,
    paths: &[NodePath],
    rewrite: &mut dyn FnMut(Vec<Node>) -> Vec<Node>,
) {
    let selected = outermost(paths);
    if selected.is_empty() || selected.iter().any(|leaf| path::node_at(roots, leaf).is_none()) {
        return;
    }

    let mut pieces = Vec::new();
    extract(std::mem::take(roots), &mut Vec::new(), &selected, &mut pieces);

    let mut kept = Vec::with_capacity(pieces.len());
    let mut blocks = Vec::with_capacity(selected.len());
    let mut at = None;
    for piece in pieces {
        match piece {
            Piece::Kept(node) => kept.push(node),
            Piece::Selected(block) => {
                at.get_or_insert(kept.len());
                blocks.push(block);
            }
        }
    }

    let at = at.unwrap_or(kept.len());
    kept.splice(at..at, rewrite(blocks));
    *roots = kept;
}

enum Piece {
    Kept(Node),
    Selected(Node),
}

/// Flatten `nodes` into root-level pieces, splitting every container that
/// holds a selected block around it
fn extract(nodes: Vec<Node>, prefix: &mut NodePath, selected: &[NodePath], out: &mut Vec<Piece>) {
    for (index, node) in nodes.into_iter().enumerate() {
        prefix.push(index);
        if selected.iter().any(|leaf| leaf.as_slice() == prefix.as_slice()) {
            out.push(Piece::Selected(node));
        } else if selected.iter().any(|leaf| path::is_ancestor(prefix, leaf)) {
            split_container(node, prefix, selected, out);
        } else {
            out.push(Piece::Kept(node));
        }
        prefix.pop();
    }
}

fn split_container(mut container: Node, prefix: &mut NodePath, selected: &[NodePath], out: &mut Vec<Piece>) {
    let mut inner = Vec::new();
    extract(container.take_children(), prefix, selected, &mut inner);

    let mut run = Vec::new();
    for piece in inner {
        match piece {
            Piece::Kept(child) => run.push(child),
            Piece::Selected(block) => {
                push_part(&container, &mut run, out);
                out.push(Piece::Selected(block));
            }
        }
    }
    push_part(&container, &mut run, out);
}

/// Emit the unselected `run` inside a copy of its (emptied) container
fn push_part(container: &Node, run: &mut Vec<Node>, out: &mut Vec<Piece>) {
    if run.iter().all(Node::is_blank_text) {
        run.clear();
        return;
    }
    out.push(Piece::Kept(container.clone().with_children(std::mem::take(run))));
}

/// Load-time cleanup: loose inline content at the root becomes
/// `block_tag` blocks; blank text between blocks and inside containers
/// is dropped
pub fn normalize(nodes: Vec<Node>, block_tag: &str) -> Vec<Node> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    for node in nodes {
        if node.is_block() {
            flush_run(&mut run, &mut out, |run| Node::element(block_tag).with_children(run));
            out.push(strip_container_blanks(node));
        } else {
            run.push(node);
        }
    }
    flush_run(&mut run, &mut out, |run| Node::element(block_tag).with_children(run));
    out.retain(|node| !node.is_blank_text());
    out
}

fn strip_container_blanks(mut node: Node) -> Node {
    let is_container = node.tag().is_some_and(tags::is_container);
    if let Some(children) = node.children_mut() {
        let taken = std::mem::take(children);
        *children = taken
            .into_iter()
            .filter(|child| !(is_container && child.is_blank_text()))
            .map(|child| if child.is_block() { strip_container_blanks(child) } else { child })
            .collect();
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use custom_editor_dom::{parse_fragment, to_html};

    fn doc(html: &str) -> Vec<Node> {
        normalize(parse_fragment(html).unwrap(), "p")
    }

    fn all_leaves(roots: &[Node]) -> Vec<NodePath> {
        path::leaf_blocks(roots)
    }

    #[test]
    fn test_inline_fully_in() {
        let roots = doc("<p><b>x</b> <strong>y</strong></p><p><b>x</b>y</p><p></p>");
        assert!(inline_fully_in(&roots[0], &BOLD_TAGS));
        assert!(!inline_fully_in(&roots[1], &BOLD_TAGS));
        assert!(!inline_fully_in(&roots[2], &BOLD_TAGS));
    }

    #[test]
    fn test_apply_inline_does_not_nest() {
        let mut roots = doc("<p>x<b>y</b>z</p>");
        let paths = all_leaves(&roots);
        apply_inline(&mut roots, &paths, "b", &BOLD_TAGS);
        assert_eq!(to_html(&roots), "<p><b>xyz</b></p>");

        // already bold: untouched
        apply_inline(&mut roots, &paths, "b", &BOLD_TAGS);
        assert_eq!(to_html(&roots), "<p><b>xyz</b></p>");
    }

    #[test]
    fn test_remove_and_clear_inline() {
        let mut roots = doc("<p><b>x<i>y</i></b><br><a href=\"/\">z</a></p>");
        let paths = all_leaves(&roots);
        remove_inline(&mut roots, &paths, &BOLD_TAGS);
        assert_eq!(to_html(&roots), "<p>x<i>y</i><br><a href=\"/\">z</a></p>");

        clear_inline(&mut roots, &paths);
        assert_eq!(to_html(&roots), "<p>xy<br>z</p>");
    }

    #[test]
    fn test_make_list_merges_neighbours() {
        let mut roots = doc("<p>a</p><p>b</p><p>c</p>");
        let paths = all_leaves(&roots)[..2].to_vec();
        make_list(&mut roots, &paths, "ul");
        assert_eq!(to_html(&roots), "<ul><li>a</li><li>b</li></ul><p>c</p>");

        let items = all_leaves(&roots)[..1].to_vec();
        make_list(&mut roots, &items, "ol");
        assert_eq!(to_html(&roots), "<ol><li>a</li><li>b</li></ol><p>c</p>");
    }

    #[test]
    fn test_remove_list() {
        let mut roots = doc("<ul><li>a</li><li><b>b</b></li></ul>");
        let paths = all_leaves(&roots);
        remove_list(&mut roots, &paths, "p");
        assert_eq!(to_html(&roots), "<p>a</p><p><b>b</b></p>");
    }

    #[test]
    fn test_increase_list_level_shares_nested_list() {
        let mut roots = doc("<ul><li>a</li><li>b</li><li>c</li></ul>");
        let paths = all_leaves(&roots)[1..].to_vec();
        increase_list_level(&mut roots, &paths);
        assert_eq!(to_html(&roots), "<ul><li>a<ul><li>b</li><li>c</li></ul></li></ul>");
    }

    #[test]
    fn test_first_item_cannot_be_nested() {
        let mut roots = doc("<ul><li>a</li><li>b</li></ul>");
        let paths = all_leaves(&roots)[..1].to_vec();
        increase_list_level(&mut roots, &paths);
        assert_eq!(to_html(&roots), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_decrease_nested_item() {
        let mut roots = doc("<ul><li>a<ul><li>b</li><li>c</li></ul></li><li>d</li></ul>");
        // leaves: a, b, c, d
        let paths = vec![all_leaves(&roots)[1].clone()];
        decrease_list_level(&mut roots, &paths, "p");
        assert_eq!(to_html(&roots), "<ul><li>a</li><li>b<ul><li>c</li></ul></li><li>d</li></ul>");
    }

    #[test]
    fn test_decrease_top_level_item_splits_list() {
        let mut roots = doc("<ol><li>a</li><li>b</li><li>c</li></ol>");
        let paths = vec![all_leaves(&roots)[1].clone()];
        decrease_list_level(&mut roots, &paths, "p");
        assert_eq!(to_html(&roots), "<ol><li>a</li></ol><p>b</p><ol><li>c</li></ol>");
    }

    #[test]
    fn test_quote_levels() {
        let mut roots = doc("<p>a</p><p>b</p><p>c</p>");
        let paths = all_leaves(&roots)[..2].to_vec();
        increase_quote_level(&mut roots, &paths);
        assert_eq!(to_html(&roots), "<blockquote><p>a</p><p>b</p></blockquote><p>c</p>");

        let paths = all_leaves(&roots)[..1].to_vec();
        decrease_quote_level(&mut roots, &paths, "p");
        assert_eq!(to_html(&roots), "<p>a</p><p>b</p><p>c</p>");
    }

    #[test]
    fn test_quote_wraps_whole_list() {
        let mut roots = doc("<ul><li>a</li><li>b</li></ul>");
        let paths = all_leaves(&roots);
        increase_quote_level(&mut roots, &paths);
        assert_eq!(to_html(&roots), "<blockquote><ul><li>a</li><li>b</li></ul></blockquote>");
    }

    #[test]
    fn test_rewrite_blocks_one_to_one() {
        let mut roots = doc("<p>a</p><p><b>x</b>y</p>");
        let paths = all_leaves(&roots);
        rewrite_blocks(&mut roots, &paths, &mut |blocks| {
            blocks
                .into_iter()
                .map(|block| Node::element("h2").with_children(block.into_children()))
                .collect()
        });
        assert_eq!(to_html(&roots), "<h2>a</h2><h2><b>x</b>y</h2>");
    }

    #[test]
    fn test_rewrite_blocks_collapsing() {
        let mut roots = doc("<p>a</p><p>b</p><p>c</p>");
        let paths = all_leaves(&roots)[1..].to_vec();
        rewrite_blocks(&mut roots, &paths, &mut |blocks| {
            let text: String = blocks.iter().map(Node::text_content).collect();
            vec![Node::element("pre").with_child(Node::text(text))]
        });
        assert_eq!(to_html(&roots), "<p>a</p><pre>bc</pre>");
    }

    #[test]
    fn test_rewrite_blocks_splits_partially_selected_list() {
        let mut roots = doc("<ol start=\"3\"><li>a</li><li>b</li><li>c</li></ol>");
        let paths = vec![all_leaves(&roots)[1].clone()];
        rewrite_blocks(&mut roots, &paths, &mut |blocks| blocks);
        assert_eq!(
            to_html(&roots),
            "<ol start=\"3\"><li>a</li></ol><li>b</li><ol start=\"3\"><li>c</li></ol>"
        );
    }

    #[test]
    fn test_rewrite_blocks_lifts_out_of_nested_containers() {
        let mut roots = doc("<blockquote><ul><li>a</li></ul><p>b</p></blockquote><p>c</p>");
        let paths = all_leaves(&roots)[..1].to_vec();
        rewrite_blocks(&mut roots, &paths, &mut |blocks| {
            blocks
                .into_iter()
                .map(|block| Node::element("h2").with_children(block.into_children()))
                .collect()
        });
        assert_eq!(to_html(&roots), "<h2>a</h2><blockquote><p>b</p></blockquote><p>c</p>");
    }

    #[test]
    fn test_normalize() {
        let roots = doc("loose <b>text</b>\n<ul>\n  <li>a</li>\n</ul>\n");
        assert_eq!(to_html(&roots), "<p>loose <b>text</b>\n</p><ul><li>a</li></ul>");
    }
}
