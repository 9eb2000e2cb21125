//! # Engine Adapter
//!
//! Wraps an [`EditingEngine`] and exposes the operations the boundary
//! needs, including the ones the engine does not provide directly:
//!
//! - list-item-aware indenting (list level inside lists, quote level elsewhere)
//! - block-type replacement built on [`EditingEngine::modify_blocks`]
//! - probing the fixed format vocabulary for the caret event

use custom_editor_dom::Node;
use tracing::debug;

use crate::command::Command;
use crate::engine::{EditingEngine, NotificationKind};

/// Tags probed for the `caret` event, in reporting order
pub const FORMAT_PROBES: [&str; 14] = [
    "b", "strong", "i", "em", "h1", "h2", "h3", "h4", "p", "div", "ul", "ol", "li", "a",
];

#[derive(Debug)]
pub struct Editor<E> {
    engine: E,
}

impl<E: EditingEngine> Editor<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn html(&self) -> String {
        self.engine.html()
    }

    pub fn set_html(&mut self, html: &str) -> Result<(), E::Error> {
        self.engine.set_html(html)
    }

    pub fn subscribe(&mut self, kind: NotificationKind) {
        self.engine.subscribe(kind);
    }

    pub fn take_notifications(&mut self) -> Vec<NotificationKind> {
        self.engine.take_notifications()
    }

    /// Formats from [`FORMAT_PROBES`] active at the selection
    pub fn active_formats(&self) -> Vec<String> {
        FORMAT_PROBES
            .iter()
            .filter(|tag| self.engine.has_format(tag))
            .map(|tag| tag.to_string())
            .collect()
    }

    /// Run a command, then hand focus back to the editing surface. Engine
    /// errors are returned after focusing.
    pub fn run(&mut self, command: Command) -> Result<(), E::Error> {
        debug!(%command, "Running editor command");

        let result = match command {
            Command::SetBlockType(block_type) => self.replace_blocks_with(block_type.tag()),
            other => {
                self.run_direct(other);
                Ok(())
            }
        };

        self.engine.focus();
        result
    }

    fn run_direct(&mut self, command: Command) {
        match command {
            Command::IncreaseLevel => {
                if self.engine.has_format("li") {
                    self.engine.increase_list_level();
                } else {
                    self.engine.increase_quote_level();
                }
            }
            Command::DecreaseLevel => {
                if self.engine.has_format("li") {
                    self.engine.decrease_list_level();
                } else {
                    self.engine.decrease_quote_level();
                }
            }
            Command::MakeUnorderedList => self.engine.make_unordered_list(),
            Command::MakeOrderedList => self.engine.make_ordered_list(),
            Command::RemoveList => self.engine.remove_list(),
            Command::Bold => self.engine.bold(),
            Command::RemoveBold => self.engine.remove_bold(),
            Command::Italic => self.engine.italic(),
            Command::RemoveItalic => self.engine.remove_italic(),
            Command::Undo => self.engine.undo(),
            Command::Redo => self.engine.redo(),
            Command::RemoveAllFormatting => self.engine.remove_all_formatting(),
            Command::SetBlockType(_) => {}
        }
    }

    /// Replace every selected block with a `tag` element holding the same
    /// inline content. Attributes of the old block are dropped.
    pub fn replace_blocks_with(&mut self, tag: &str) -> Result<(), E::Error> {
        let tag = tag.to_string();
        self.engine.modify_blocks(Box::new(move |blocks| {
            blocks
                .into_iter()
                .map(|block| Node::element(tag.clone()).with_children(block.into_children()))
                .collect()
        }))
    }
}
