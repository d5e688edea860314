//! Multi-shape selection with modifier-driven combination modes.

use uuid::Uuid;

/// Stable identity of a shape within an editing session. Identifiers are
/// minted when a document is loaded and never reused, so undo snapshots
/// and z-order moves cannot confuse two shapes that share geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

/// How an incoming pick combines with the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No modifier. The pick becomes the whole selection.
    #[default]
    Replace,
    /// Ctrl held. The pick is appended.
    Add,
    /// Shift held. The pick is removed.
    Remove,
    /// Ctrl and shift held. Picked shapes toggle membership.
    Invert,
}

impl SelectionMode {
    pub fn from_modifiers(ctrl: bool, shift: bool) -> Self {
        match (ctrl, shift) {
            (true, true) => SelectionMode::Invert,
            (true, false) => SelectionMode::Add,
            (false, true) => SelectionMode::Remove,
            (false, false) => SelectionMode::Replace,
        }
    }
}

/// Ordered, duplicate-free set of selected shape identifiers.
#[derive(Debug, Default)]
pub struct Selection {
    ids: Vec<ShapeId>,
    pub mode: SelectionMode,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Apply a pick under the current mode. `None` stands for a click on
    /// empty space: it clears the selection in replace mode and is a
    /// no-op in the modifier modes, so a stray ctrl-click cannot drop a
    /// built-up selection.
    pub fn set(&mut self, picked: Option<&[ShapeId]>) {
        match (self.mode, picked) {
            (SelectionMode::Replace, None) => self.ids.clear(),
            (_, None) => {}
            (SelectionMode::Replace, Some(picked)) => self.replace(picked),
            (SelectionMode::Add, Some(picked)) => self.add(picked),
            (SelectionMode::Remove, Some(picked)) => self.remove(picked),
            (SelectionMode::Invert, Some(picked)) => self.invert(picked),
        }
    }

    fn replace(&mut self, picked: &[ShapeId]) {
        self.ids.clear();
        self.add(picked);
    }

    fn add(&mut self, picked: &[ShapeId]) {
        for &id in picked {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    fn remove(&mut self, picked: &[ShapeId]) {
        self.ids.retain(|id| !picked.contains(id));
    }

    fn invert(&mut self, picked: &[ShapeId]) {
        for &id in picked {
            if let Some(pos) = self.ids.iter().position(|&i| i == id) {
                self.ids.remove(pos);
            } else {
                self.ids.push(id);
            }
        }
    }
}
