//! # Undo/Redo Stack
//!
//! Snapshot history for the in-memory engine.
//!
//! ## Design
//!
//! - The state before each edit is recorded on the undo stack
//! - Undo swaps the current state for the most recent snapshot and keeps
//!   the current one for redo
//! - Redo swaps back
//! - A new edit clears the redo stack
//! - The oldest entries are dropped once `max_levels` is exceeded

#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    /// States before applied edits (most recent last)
    undo_stack: Vec<T>,

    /// States before undone edits were reverted (most recent last)
    redo_stack: Vec<T>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl<T> UndoStack<T> {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record the state preceding an edit
    pub fn record(&mut self, before: T) {
        self.undo_stack.push(before);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates future
        self.redo_stack.clear();
    }

    /// Step back; returns the state to restore, or `None` when there is
    /// nothing to undo (in which case `current` is dropped)
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
