//! # Editing Engine Seam
//!
//! The rich-text engine is an external collaborator. [`EditingEngine`]
//! names exactly the capabilities the boundary consumes; everything the
//! boundary builds on top (list-aware indenting, block replacement,
//! format probing) lives in [`crate::Editor`].
//!
//! Engines report changes through notifications. A host that receives
//! them as callbacks pushes them with
//! [`BoundaryElement::on_notification`](crate::BoundaryElement::on_notification);
//! an engine that raises them while a command runs queues them and hands
//! them over from [`EditingEngine::take_notifications`].

use custom_editor_dom::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Change notifications the boundary subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    /// Selection moved or the formats at the selection changed
    PathChange,
    /// Document content changed
    Input,
}

impl NotificationKind {
    /// Engine-side event name
    pub fn event_name(self) -> &'static str {
        match self {
            NotificationKind::PathChange => "pathChange",
            NotificationKind::Input => "input",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Rewrites the selected blocks; receives them in document order
pub type BlockRewrite = Box<dyn FnMut(Vec<Node>) -> Vec<Node>>;

pub trait EditingEngine {
    type Error: std::error::Error + 'static;

    /// Serialized document content
    fn html(&self) -> String;

    /// Replace the document content
    fn set_html(&mut self, html: &str) -> Result<(), Self::Error>;

    /// Whether the whole selection sits inside an element with `tag`
    fn has_format(&self, tag: &str) -> bool;

    fn bold(&mut self);
    fn remove_bold(&mut self);
    fn italic(&mut self);
    fn remove_italic(&mut self);
    fn remove_all_formatting(&mut self);

    fn make_unordered_list(&mut self);
    fn make_ordered_list(&mut self);
    fn remove_list(&mut self);
    fn increase_list_level(&mut self);
    fn decrease_list_level(&mut self);
    fn increase_quote_level(&mut self);
    fn decrease_quote_level(&mut self);

    fn undo(&mut self);
    fn redo(&mut self);

    /// Move input focus into the editable surface
    fn focus(&mut self);

    /// Extract the selected blocks, pass them to `rewrite` and put its
    /// output in place of the extracted range. The range reaches up to the
    /// root, splitting any list or quote it only partly covers.
    fn modify_blocks(&mut self, rewrite: BlockRewrite) -> Result<(), Self::Error>;

    /// Start delivering notifications of `kind`
    fn subscribe(&mut self, kind: NotificationKind);

    /// Notifications raised since the last call, oldest first
    fn take_notifications(&mut self) -> Vec<NotificationKind> {
        Vec::new()
    }
}
