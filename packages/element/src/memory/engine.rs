//! # In-Memory Engine
//!
//! A small, deterministic [`EditingEngine`] over detached
//! [`Node`](custom_editor_dom::Node) trees. It backs the tests and the
//! replay CLI, standing in for the browser engine.
//!
//! The selection is a range of leaf blocks (see
//! [`path::leaf_blocks`]) rather than a character range: formatting
//! commands apply to the whole inline content of each selected block.

use custom_editor_dom::path::{self, NodePath};
use custom_editor_dom::{parse_fragment, to_html, HtmlError, Node};
use thiserror::Error;
use tracing::{debug, trace};

use super::ops;
use super::undo_stack::UndoStack;
use crate::config::ElementConfig;
use crate::engine::{BlockRewrite, EditingEngine, NotificationKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryEngineError {
    #[error("Cannot load HTML: {0}")]
    Html(#[from] HtmlError),
}

/// Inclusive range of selected leaf blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self {
            start: anchor.min(focus),
            end: anchor.max(focus),
        }
    }

    pub fn block(index: usize) -> Self {
        Self::new(index, index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    roots: Vec<Node>,
    selection: Selection,
}

#[derive(Debug)]
pub struct MemoryEngine {
    roots: Vec<Node>,
    selection: Selection,
    history: UndoStack<Snapshot>,
    block_tag: String,
    focused: bool,
    subscriptions: Vec<NotificationKind>,
    pending: Vec<NotificationKind>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::with_config(&ElementConfig::default())
    }

    pub fn with_config(config: &ElementConfig) -> Self {
        Self {
            roots: Vec::new(),
            selection: Selection::default(),
            history: UndoStack::with_max_levels(config.undo_levels),
            block_tag: config.block_tag.clone(),
            focused: false,
            subscriptions: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn from_html(html: &str) -> Result<Self, MemoryEngineError> {
        let mut engine = Self::new();
        engine.set_html(html)?;
        engine.pending.clear();
        Ok(engine)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select leaf blocks `anchor..=focus`, like a user drag
    pub fn select(&mut self, anchor: usize, focus: usize) {
        self.selection = Selection::new(anchor, focus);
        trace!(selection = ?self.selection, "Selection changed");
        self.notify(NotificationKind::PathChange);
    }

    pub fn select_all(&mut self) {
        let last = path::leaf_blocks(&self.roots).len().saturating_sub(1);
        self.select(0, last);
    }

    /// Number of selectable blocks
    pub fn block_count(&self) -> usize {
        path::leaf_blocks(&self.roots).len()
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn notify(&mut self, kind: NotificationKind) {
        if self.subscriptions.contains(&kind) {
            self.pending.push(kind);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            roots: self.roots.clone(),
            selection: self.selection,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.roots = snapshot.roots;
        self.selection = snapshot.selection;
    }

    fn selected_paths(&self) -> Vec<NodePath> {
        let leaves = path::leaf_blocks(&self.roots);
        if leaves.is_empty() {
            return Vec::new();
        }
        let end = self.selection.end.min(leaves.len() - 1);
        let start = self.selection.start.min(end);
        leaves[start..=end].to_vec()
    }

    /// Run a structural edit over the selected blocks, recording history
    /// and raising notifications
    fn edit(&mut self, operation: &'static str, apply: impl FnOnce(&mut Vec<Node>, &[NodePath], &str)) {
        let paths = self.selected_paths();
        if paths.is_empty() {
            trace!(operation, "Nothing selected");
            return;
        }

        let before = self.snapshot();
        apply(&mut self.roots, paths.as_slice(), self.block_tag.as_str());

        if self.roots != before.roots {
            debug!(operation, blocks = paths.len(), "Document changed");
            self.history.record(before);
            self.notify(NotificationKind::Input);
        }
        self.notify(NotificationKind::PathChange);
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EditingEngine for MemoryEngine {
    type Error = MemoryEngineError;

    fn html(&self) -> String {
        to_html(&self.roots)
    }

    fn set_html(&mut self, html: &str) -> Result<(), Self::Error> {
        let nodes = parse_fragment(html)?;
        self.roots = ops::normalize(nodes, &self.block_tag);
        self.selection = Selection::default();
        self.history.clear();
        self.notify(NotificationKind::PathChange);
        Ok(())
    }

    fn has_format(&self, tag: &str) -> bool {
        let tag = tag.to_ascii_lowercase();
        let paths = self.selected_paths();
        !paths.is_empty() && paths.iter().all(|leaf| ops::has_format_at(&self.roots, leaf, &tag))
    }

    fn bold(&mut self) {
        self.edit("bold", |roots, paths, _| ops::apply_inline(roots, paths, "b", &ops::BOLD_TAGS));
    }

    fn remove_bold(&mut self) {
        self.edit("removeBold", |roots, paths, _| ops::remove_inline(roots, paths, &ops::BOLD_TAGS));
    }

    fn italic(&mut self) {
        self.edit("italic", |roots, paths, _| ops::apply_inline(roots, paths, "i", &ops::ITALIC_TAGS));
    }

    fn remove_italic(&mut self) {
        self.edit("removeItalic", |roots, paths, _| ops::remove_inline(roots, paths, &ops::ITALIC_TAGS));
    }

    fn remove_all_formatting(&mut self) {
        self.edit("removeAllFormatting", |roots, paths, _| ops::clear_inline(roots, paths));
    }

    fn make_unordered_list(&mut self) {
        self.edit("makeUnorderedList", |roots, paths, _| ops::make_list(roots, paths, "ul"));
    }

    fn make_ordered_list(&mut self) {
        self.edit("makeOrderedList", |roots, paths, _| ops::make_list(roots, paths, "ol"));
    }

    fn remove_list(&mut self) {
        self.edit("removeList", ops::remove_list);
    }

    fn increase_list_level(&mut self) {
        self.edit("increaseListLevel", |roots, paths, _| ops::increase_list_level(roots, paths));
    }

    fn decrease_list_level(&mut self) {
        self.edit("decreaseListLevel", ops::decrease_list_level);
    }

    fn increase_quote_level(&mut self) {
        self.edit("increaseQuoteLevel", |roots, paths, _| ops::increase_quote_level(roots, paths));
    }

    fn decrease_quote_level(&mut self) {
        self.edit("decreaseQuoteLevel", ops::decrease_quote_level);
    }

    fn undo(&mut self) {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                self.notify(NotificationKind::Input);
                self.notify(NotificationKind::PathChange);
            }
            None => trace!("Nothing to undo"),
        }
    }

    fn redo(&mut self) {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                self.notify(NotificationKind::Input);
                self.notify(NotificationKind::PathChange);
            }
            None => trace!("Nothing to redo"),
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn modify_blocks(&mut self, mut rewrite: BlockRewrite) -> Result<(), Self::Error> {
        self.edit("modifyBlocks", move |roots, paths, _| {
            ops::rewrite_blocks(roots, paths, &mut *rewrite)
        });
        Ok(())
    }

    fn subscribe(&mut self, kind: NotificationKind) {
        if !self.subscriptions.contains(&kind) {
            self.subscriptions.push(kind);
        }
    }

    fn take_notifications(&mut self) -> Vec<NotificationKind> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(html: &str) -> MemoryEngine {
        let mut engine = MemoryEngine::from_html(html).unwrap();
        engine.subscribe(NotificationKind::PathChange);
        engine.subscribe(NotificationKind::Input);
        engine
    }

    #[test]
    fn test_set_html_is_verbatim_for_block_markup() {
        let engine = engine("<p>World</p>");
        assert_eq!(engine.html(), "<p>World</p>");
    }

    #[test]
    fn test_set_html_wraps_loose_text() {
        let engine = engine("hello");
        assert_eq!(engine.html(), "<p>hello</p>");

        let config = ElementConfig {
            block_tag: "div".to_string(),
            ..ElementConfig::default()
        };
        let mut engine = MemoryEngine::with_config(&config);
        engine.set_html("hello").unwrap();
        assert_eq!(engine.html(), "<div>hello</div>");
    }

    #[test]
    fn test_malformed_html_is_an_error() {
        let mut engine = engine("<p>keep</p>");
        let err = engine.set_html("<p><b>x</p>").unwrap_err();
        assert!(matches!(err, MemoryEngineError::Html(HtmlError::MismatchedClosingTag { .. })));
        assert_eq!(engine.html(), "<p>keep</p>");
    }

    #[test]
    fn test_bold_sets_format() {
        let mut engine = engine("<p>x</p><p>y</p>");
        engine.select(0, 0);
        assert!(!engine.has_format("b"));

        engine.bold();
        assert!(engine.has_format("b"));
        assert!(engine.has_format("B"));
        assert_eq!(engine.html(), "<p><b>x</b></p><p>y</p>");

        engine.select(0, 1);
        assert!(!engine.has_format("b"));
        assert!(engine.has_format("p"));
    }

    #[test]
    fn test_notifications_only_when_subscribed() {
        let mut engine = MemoryEngine::from_html("<p>x</p>").unwrap();
        engine.bold();
        assert!(engine.take_notifications().is_empty());

        engine.subscribe(NotificationKind::Input);
        engine.remove_bold();
        assert_eq!(engine.take_notifications(), vec![NotificationKind::Input]);
        assert!(engine.take_notifications().is_empty());
    }

    #[test]
    fn test_unchanged_edit_raises_no_input() {
        let mut engine = engine("<p>x</p>");
        engine.take_notifications();

        engine.remove_bold();
        assert_eq!(engine.take_notifications(), vec![NotificationKind::PathChange]);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_undo_redo() {
        let mut engine = engine("<p>x</p>");
        engine.italic();
        engine.make_ordered_list();
        assert_eq!(engine.html(), "<ol><li><i>x</i></li></ol>");

        engine.undo();
        assert_eq!(engine.html(), "<p><i>x</i></p>");
        engine.undo();
        assert_eq!(engine.html(), "<p>x</p>");
        assert!(!engine.can_undo());

        engine.redo();
        engine.redo();
        assert_eq!(engine.html(), "<ol><li><i>x</i></li></ol>");
        assert!(!engine.can_redo());
    }

    #[test]
    fn test_history_respects_undo_levels() {
        let config = ElementConfig {
            undo_levels: 1,
            ..ElementConfig::default()
        };
        let mut engine = MemoryEngine::with_config(&config);
        engine.set_html("<p>x</p>").unwrap();
        engine.bold();
        engine.italic();

        engine.undo();
        engine.undo();
        assert_eq!(engine.html(), "<p><b>x</b></p>");
    }

    #[test]
    fn test_set_html_clears_history() {
        let mut engine = engine("<p>x</p>");
        engine.bold();
        assert!(engine.can_undo());
        engine.set_html("<p>y</p>").unwrap();
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut engine = engine("<p>a</p><p>b</p>");
        engine.select(5, 9);
        engine.bold();
        assert_eq!(engine.html(), "<p>a</p><p><b>b</b></p>");
    }

    #[test]
    fn test_empty_document_ignores_commands() {
        let mut engine = engine("");
        engine.take_notifications();
        engine.bold();
        engine.make_unordered_list();
        assert_eq!(engine.html(), "");
        assert!(engine.take_notifications().is_empty());
        assert!(!engine.has_format("p"));
    }

    #[test]
    fn test_modify_blocks() {
        let mut engine = engine("<p>a</p><p>b</p>");
        engine.select_all();
        engine.modify_blocks(Box::new(|blocks| {
            blocks
                .into_iter()
                .map(|block| Node::element("h3").with_children(block.into_children()))
                .collect()
        }))
        .unwrap();
        assert_eq!(engine.html(), "<h3>a</h3><h3>b</h3>");
        assert!(engine.has_format("h3"));
    }

    #[test]
    fn test_focus() {
        let mut engine = engine("<p>a</p>");
        assert!(!engine.has_focus());
        engine.focus();
        assert!(engine.has_focus());
        engine.blur();
        assert!(!engine.has_focus());
    }
}
