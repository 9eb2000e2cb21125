//! In-memory engine and host
//!
//! Deterministic stand-ins for the browser: [`MemoryEngine`] edits a
//! detached node tree, [`MemoryHost`] records every surface mutation and
//! outward event.

mod engine;
mod host;
pub mod ops;
mod undo_stack;

pub use engine::{MemoryEngine, MemoryEngineError, Selection};
pub use host::{HostOp, MemoryHost};
pub use undo_stack::UndoStack;
