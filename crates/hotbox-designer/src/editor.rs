//! The interactive editing session for one hotbox document.
//!
//! `ShapeEditor` owns the document, the selection, the manipulator frame
//! and the undo history, and translates a pointer protocol (press, move,
//! release plus modifier changes) into document edits. A whole drag
//! gesture records exactly one undo entry, committed on release.

use hotbox_core::geometry::{combined_rect, Point, Rect, Snap};
use hotbox_core::{GeneralOptions, HotboxData, ShapeData};
use tracing::debug;

use crate::arrange::{
    move_down_elements, move_elements_to_begin, move_elements_to_end, move_up_elements,
};
use crate::manipulator::{Manipulator, SelectionSquare};
use crate::selection::{Selection, SelectionMode, ShapeId};
use crate::transform::Transform;
use crate::history::UndoManager;

/// A document shape paired with its session identity.
#[derive(Debug, Clone)]
pub struct EditorShape {
    pub id: ShapeId,
    pub data: ShapeData,
}

impl EditorShape {
    fn new(data: ShapeData) -> Self {
        Self {
            id: ShapeId::new(),
            data,
        }
    }
}

/// Direct-manipulation editor over a hotbox document.
#[derive(Debug)]
pub struct ShapeEditor {
    general: GeneralOptions,
    shapes: Vec<EditorShape>,
    pub selection: Selection,
    selection_square: SelectionSquare,
    manipulator: Manipulator,
    transform: Transform,
    undo_manager: UndoManager,
    clipboard: Vec<ShapeData>,
    clicked: bool,
    handling: bool,
    manipulator_moved: bool,
    edit_center_mode: bool,
    increase_undo_on_release: bool,
    clicked_shape: Option<ShapeId>,
    ctrl_pressed: bool,
    shift_pressed: bool,
}

impl ShapeEditor {
    pub fn new(data: HotboxData) -> Self {
        let undo_manager = UndoManager::new(data.clone());
        let shapes = data.shapes.into_iter().map(EditorShape::new).collect();
        Self {
            general: data.general,
            shapes,
            selection: Selection::new(),
            selection_square: SelectionSquare::new(),
            manipulator: Manipulator::new(),
            transform: Transform::new(),
            undo_manager,
            clipboard: Vec::new(),
            clicked: false,
            handling: false,
            manipulator_moved: false,
            edit_center_mode: false,
            increase_undo_on_release: false,
            clicked_shape: None,
            ctrl_pressed: false,
            shift_pressed: false,
        }
    }

    pub fn general(&self) -> &GeneralOptions {
        &self.general
    }

    pub fn shapes(&self) -> &[EditorShape] {
        &self.shapes
    }

    pub fn manipulator(&self) -> &Manipulator {
        &self.manipulator
    }

    pub fn selection_square(&self) -> &SelectionSquare {
        &self.selection_square
    }

    /// Serialize the session back into a document snapshot.
    pub fn document(&self) -> HotboxData {
        HotboxData {
            general: self.general.clone(),
            shapes: self.shapes.iter().map(|s| s.data.clone()).collect(),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.undo_manager.data_modified()
    }

    pub fn mark_saved(&mut self) {
        self.undo_manager.set_data_saved();
    }

    // ------------------------------------------------------------------
    // Pointer protocol

    /// Route a press: a handle grab or a body grab starts a transform
    /// gesture, empty space starts a rubber-band selection.
    pub fn mouse_press(&mut self, cursor: Point) {
        let direction = self.manipulator.direction_at(cursor);
        self.clicked = true;
        self.manipulator_moved = false;
        self.transform.direction = direction;
        self.transform.set_rect(self.manipulator.rect());

        self.clicked_shape = self
            .shapes
            .iter()
            .rev()
            .find(|shape| shape.data.rect().contains(&cursor))
            .map(|shape| shape.id);

        let inside_body = self.manipulator.contains(cursor);
        if inside_body {
            self.transform.set_reference_point(cursor);
        }
        self.handling = direction.is_some() || inside_body;
        if !self.handling && !self.edit_center_mode {
            self.selection_square.press(cursor);
        }
    }

    /// Route a move: drag the center marker, the rubber band, a resize
    /// handle or the whole selection, whichever the press armed.
    pub fn mouse_move(&mut self, cursor: Point) {
        if self.edit_center_mode {
            if self.clicked {
                let target = self.snapped(cursor);
                self.general.centerx = target.x;
                self.general.centery = target.y;
                self.increase_undo_on_release = true;
            }
            return;
        }
        if self.selection_square.handling() {
            self.selection_square.drag(cursor);
            return;
        }
        if !self.handling {
            return;
        }

        self.manipulator_moved = true;
        let ids: Vec<ShapeId> = self.selection.ids().to_vec();
        let mut rects: Vec<Rect> = ids
            .iter()
            .filter_map(|&id| self.shape(id).map(|s| s.data.rect()))
            .collect();

        if self.transform.direction.is_some() {
            self.transform.resize(&mut rects, cursor);
        } else if self
            .transform
            .rect()
            .is_some_and(|rect| rect.contains(&cursor))
        {
            self.transform.move_to(&mut rects, cursor);
        } else {
            return;
        }

        for (&id, rect) in ids.iter().zip(&rects) {
            if let Some(shape) = self.shape_mut(id) {
                shape.data.set_rect(rect);
            }
        }
        self.manipulator.set_rect(self.transform.rect());
        self.increase_undo_on_release = true;
    }

    /// Route a release: resolve the click into a selection change when
    /// no drag happened, close the rubber band, and commit the gesture
    /// to the undo history if anything moved.
    pub fn mouse_release(&mut self, _cursor: Point) {
        if self.edit_center_mode {
            self.commit_gesture();
            self.clicked = false;
            return;
        }

        let picked = self.clicked_shape;
        let keep_selection = self.handling
            && (picked.is_some_and(|id| self.selection.contains(id)) || self.manipulator_moved);
        if !keep_selection {
            let pick: Option<Vec<ShapeId>> = picked.map(|id| vec![id]);
            self.selection.set(pick.as_deref());
            self.update_selection();
        }

        if self.selection_square.handling() {
            if let Some(band) = self.selection_square.rect() {
                let hit: Vec<ShapeId> = self
                    .shapes
                    .iter()
                    .filter(|shape| shape.data.rect().intersects(&band))
                    .map(|shape| shape.id)
                    .collect();
                if !hit.is_empty() {
                    self.selection.set(Some(&hit));
                    self.update_selection();
                }
            }
            self.selection_square.release();
        }

        self.commit_gesture();
        self.clicked = false;
        self.handling = false;
        self.clicked_shape = None;
    }

    fn commit_gesture(&mut self) {
        if self.increase_undo_on_release {
            self.record_modification();
            self.increase_undo_on_release = false;
        }
    }

    pub fn set_ctrl_pressed(&mut self, pressed: bool) {
        self.ctrl_pressed = pressed;
        self.update_selection_mode();
    }

    pub fn set_shift_pressed(&mut self, pressed: bool) {
        self.shift_pressed = pressed;
        self.transform.square = pressed;
        self.update_selection_mode();
    }

    fn update_selection_mode(&mut self) {
        self.selection.mode = SelectionMode::from_modifiers(self.ctrl_pressed, self.shift_pressed);
    }

    // ------------------------------------------------------------------
    // Selection bookkeeping

    /// Refit the manipulator frame to the current selection and rearm
    /// the transform from it.
    pub fn update_selection(&mut self) {
        let rects: Vec<Rect> = self
            .selection
            .ids()
            .iter()
            .filter_map(|&id| self.shape(id).map(|s| s.data.rect()))
            .collect();
        self.manipulator.set_rect(combined_rect(&rects));
        self.transform.set_rect(self.manipulator.rect());
    }

    pub fn select_all(&mut self) {
        let ids: Vec<ShapeId> = self.shapes.iter().map(|s| s.id).collect();
        self.selection.mode = SelectionMode::Replace;
        self.selection.set(Some(&ids));
        self.update_selection_mode();
        self.update_selection();
    }

    fn shape(&self, id: ShapeId) -> Option<&EditorShape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut EditorShape> {
        self.shapes.iter_mut().find(|shape| shape.id == id)
    }

    // ------------------------------------------------------------------
    // Document edits

    /// Add a shape from a template, centered in the editing area.
    /// Background shapes land under everything else, interactive shapes
    /// on top.
    pub fn create_shape(&mut self, template: ShapeData) {
        let mut data = template;
        let mut rect = data.rect();
        rect.center_on(Point::new(self.general.width / 2.0, self.general.height / 2.0));
        data.set_rect(&rect);
        let to_bottom = !data.is_interactive();
        let shape = EditorShape::new(data);
        let id = shape.id;
        if to_bottom {
            self.shapes.insert(0, shape);
        } else {
            self.shapes.push(shape);
        }
        self.selection.mode = SelectionMode::Replace;
        self.selection.set(Some(&[id]));
        self.update_selection_mode();
        self.update_selection();
        self.record_modification();
    }

    pub fn delete_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let count = self.shapes.len();
        self.shapes.retain(|shape| !self.selection.contains(shape.id));
        debug!(removed = count - self.shapes.len(), "deleted selection");
        self.selection.clear();
        self.update_selection();
        self.record_modification();
    }

    pub fn copy_selection(&mut self) {
        self.clipboard = self
            .selection
            .ids()
            .iter()
            .filter_map(|&id| self.shape(id).map(|s| s.data.clone()))
            .collect();
    }

    /// Paste the clipboard on top of the stack and select the pasted
    /// shapes.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let pasted: Vec<EditorShape> = self
            .clipboard
            .iter()
            .cloned()
            .map(EditorShape::new)
            .collect();
        let ids: Vec<ShapeId> = pasted.iter().map(|s| s.id).collect();
        self.shapes.extend(pasted);
        self.selection.mode = SelectionMode::Replace;
        self.selection.set(Some(&ids));
        self.update_selection_mode();
        self.update_selection();
        self.record_modification();
    }

    pub fn move_selection_up(&mut self) {
        let selection = &self.selection;
        move_up_elements(&mut self.shapes, |shape| selection.contains(shape.id));
        self.record_modification();
    }

    pub fn move_selection_down(&mut self) {
        let selection = &self.selection;
        move_down_elements(&mut self.shapes, |shape| selection.contains(shape.id));
        self.record_modification();
    }

    pub fn move_selection_to_front(&mut self) {
        let shapes = std::mem::take(&mut self.shapes);
        let selection = &self.selection;
        self.shapes = move_elements_to_end(shapes, |shape| selection.contains(shape.id));
        self.record_modification();
    }

    pub fn move_selection_to_back(&mut self) {
        let shapes = std::mem::take(&mut self.shapes);
        let selection = &self.selection;
        self.shapes = move_elements_to_begin(shapes, |shape| selection.contains(shape.id));
        self.record_modification();
    }

    pub fn set_editor_size(&mut self, width: f64, height: f64) {
        self.general.width = width;
        self.general.height = height;
        self.record_modification();
    }

    pub fn set_edit_center_mode(&mut self, enabled: bool) {
        self.edit_center_mode = enabled;
    }

    pub fn edit_center_mode(&self) -> bool {
        self.edit_center_mode
    }

    pub fn set_snap(&mut self, snap: Option<Snap>) {
        self.transform.snap = snap;
    }

    fn snapped(&self, point: Point) -> Point {
        match &self.transform.snap {
            Some(snap) => {
                let (x, y) = snap.apply(point.x, point.y);
                Point::new(x, y)
            }
            None => point,
        }
    }

    // ------------------------------------------------------------------
    // History

    fn record_modification(&mut self) {
        self.undo_manager.set_data_modified(self.document());
    }

    pub fn can_undo(&self) -> bool {
        self.undo_manager.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_manager.can_redo()
    }

    /// Restore the previous snapshot. Session identities are reminted,
    /// so the selection is dropped with the old shapes.
    pub fn undo(&mut self) -> bool {
        if !self.undo_manager.undo() {
            return false;
        }
        let data = self.undo_manager.data();
        self.load_snapshot(data);
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.undo_manager.redo() {
            return false;
        }
        let data = self.undo_manager.data();
        self.load_snapshot(data);
        true
    }

    fn load_snapshot(&mut self, data: HotboxData) {
        self.general = data.general;
        self.shapes = data.shapes.into_iter().map(EditorShape::new).collect();
        self.selection.clear();
        self.manipulator.set_rect(None);
        self.transform.set_rect(None);
    }
}
