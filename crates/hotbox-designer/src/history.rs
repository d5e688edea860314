//! Snapshot-based undo history for one hotbox document.

use hotbox_core::HotboxData;
use tracing::debug;

/// Full-document undo manager. Every recorded modification stores a deep
/// copy of the document; undo and redo swap the current state with the
/// top of the matching stack.
#[derive(Debug)]
pub struct UndoManager {
    current_state: HotboxData,
    undo_stack: Vec<HotboxData>,
    redo_stack: Vec<HotboxData>,
    modified: bool,
}

impl UndoManager {
    pub fn new(data: HotboxData) -> Self {
        Self {
            current_state: data,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            modified: false,
        }
    }

    /// Snapshot of the state the session should display.
    pub fn data(&self) -> HotboxData {
        self.current_state.clone()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Whether the document diverged from its last saved state.
    pub fn data_modified(&self) -> bool {
        self.modified
    }

    /// Step back one snapshot. Returns false when the stack is empty and
    /// nothing changed.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            debug!("undo requested with empty stack");
            return false;
        };
        let current = std::mem::replace(&mut self.current_state, previous);
        self.redo_stack.push(current);
        true
    }

    /// Step forward one snapshot. Returns false when the stack is empty
    /// and nothing changed.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            debug!("redo requested with empty stack");
            return false;
        };
        let current = std::mem::replace(&mut self.current_state, next);
        self.undo_stack.push(current);
        true
    }

    /// Record a modification: the previous state goes onto the undo
    /// stack and the redo stack is invalidated.
    pub fn set_data_modified(&mut self, data: HotboxData) {
        let previous = std::mem::replace(&mut self.current_state, data);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
        self.modified = true;
    }

    pub fn set_data_saved(&mut self) {
        self.modified = false;
    }

    /// Drop all history, keeping the current state. Used when a whole
    /// new document replaces the session.
    pub fn reset_stacks(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
