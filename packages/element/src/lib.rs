//! # Custom Editor
//!
//! A boundary element that lets a declarative, re-rendering host UI own a
//! stateful rich-text editing engine without either side corrupting the
//! other.
//!
//! The host only talks to the element through attributes (`state`,
//! `release`, `format`, `id`, `caret`) and lifecycle callbacks; the
//! element only talks back through `caret` and `draft` events. The
//! engine behind it is abstracted by [`EditingEngine`] and the host node
//! by [`HostTree`], so the same state machine runs in the browser and
//! against the in-memory implementations in [`memory`].
//!
//! ```
//! use custom_editor::{BoundaryElement, MemoryEngine, MemoryHost, Surface};
//!
//! let engine = MemoryEngine::from_html("<p>Hello</p>").unwrap();
//! let mut element = BoundaryElement::new(engine, MemoryHost::new());
//!
//! element.set_attribute("state", Some("editing")).unwrap();
//! assert_eq!(element.host().attached(), Some(Surface::Editable));
//!
//! element.set_attribute("state", Some("done")).unwrap();
//! assert_eq!(element.host().attached(), Some(Surface::Display));
//! ```

mod adapter;
mod attributes;
mod command;
mod config;
mod element;
mod engine;
mod event;
mod host;
pub mod memory;
mod mode;
mod transition;

pub use adapter::{Editor, FORMAT_PROBES};
pub use attributes::{Attributes, ObservedAttribute, UnobservedAttribute, OBSERVED_ATTRIBUTES};
pub use command::{BlockType, Command};
pub use config::{ConfigError, ElementConfig, DEFAULT_CONFIG_NAME};
pub use element::BoundaryElement;
pub use engine::{BlockRewrite, EditingEngine, NotificationKind};
pub use event::{CaretDetail, DraftDetail, OutwardEvent};
pub use host::{HostTree, Surface};
pub use memory::{HostOp, MemoryEngine, MemoryEngineError, MemoryHost, Selection, UndoStack};
pub use mode::Mode;
pub use transition::{apply_plan, plan_transition, Attachment, SurfaceOp};
