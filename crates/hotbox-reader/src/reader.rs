//! Runtime session for one hotbox.

use hotbox_core::geometry::Point;
use hotbox_core::{GeneralOptions, HotboxData, MouseButton, Triggering};
use tracing::debug;

use crate::activation::{
    execute_hovered_shape, set_crossed_shapes_hovered, set_shapes_hovered, ActionExecutor,
    ReaderShape,
};

/// What a hidden hotbox asks of its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideOutcome {
    /// Root hotboxes take their open submenus down with them.
    pub hide_submenus: bool,
}

/// A shown (or showable) hotbox: its shapes, hover state and click
/// state. The reader is headless; the host feeds it cursor positions in
/// hotbox-local coordinates and button transitions, and paints from the
/// shape states.
#[derive(Debug)]
pub struct HotboxReader {
    general: GeneralOptions,
    shapes: Vec<ReaderShape>,
    left_clicked: bool,
    right_clicked: bool,
    visible: bool,
}

impl HotboxReader {
    pub fn new(data: HotboxData) -> Self {
        Self {
            general: data.general,
            shapes: data.shapes.into_iter().map(ReaderShape::new).collect(),
            left_clicked: false,
            right_clicked: false,
            visible: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.general.name
    }

    pub fn general(&self) -> &GeneralOptions {
        &self.general
    }

    pub fn shapes(&self) -> &[ReaderShape] {
        &self.shapes
    }

    pub fn is_submenu(&self) -> bool {
        self.general.submenu
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The aiming pivot, in hotbox-local coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.general.centerx, self.general.centery)
    }

    fn clicked(&self) -> bool {
        self.left_clicked || self.right_clicked
    }

    /// Where the hotbox window's top-left corner goes so that the pivot
    /// lands under the cursor.
    pub fn window_origin_for(&self, screen_cursor: Point) -> Point {
        Point::new(
            screen_cursor.x - self.general.centerx,
            screen_cursor.y - self.general.centery,
        )
    }

    /// Recompute hover for a cursor position, honoring the activation
    /// mode.
    pub fn mouse_move(&mut self, cursor: Point) {
        let clicked = self.clicked();
        if self.general.aiming {
            let pivot = self.center();
            set_crossed_shapes_hovered(&mut self.shapes, pivot, cursor, clicked);
        } else {
            set_shapes_hovered(&mut self.shapes, cursor, clicked);
        }
    }

    pub fn mouse_press(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.left_clicked = true,
            MouseButton::Right => self.right_clicked = true,
        }
        self.sync_clicked();
    }

    /// Release a button: the hovered shape executes its armed actions.
    /// Every button still held counts, so releasing one button of a
    /// two-button chord fires both slots. Returns whether the shape asks
    /// the hotbox to close.
    pub fn mouse_release(&mut self, button: MouseButton, executor: &mut dyn ActionExecutor) -> bool {
        let close =
            execute_hovered_shape(&self.shapes, self.left_clicked, self.right_clicked, executor);
        match button {
            MouseButton::Left => self.left_clicked = false,
            MouseButton::Right => self.right_clicked = false,
        }
        self.sync_clicked();
        close
    }

    /// The cursor left the hotbox window. Hover is cleared; the return
    /// value tells the host whether this hotbox wants to close on leave.
    pub fn mouse_leave(&mut self) -> bool {
        for shape in &mut self.shapes {
            shape.hovered = false;
            shape.clicked = false;
        }
        self.general.leaveclose
    }

    fn sync_clicked(&mut self) {
        let clicked = self.clicked();
        for shape in &mut self.shapes {
            shape.clicked = shape.hovered && clicked;
        }
    }

    /// Show the hotbox at the cursor. Returns the window origin the
    /// host should place the hotbox at.
    pub fn show(&mut self, screen_cursor: Point) -> Point {
        self.visible = true;
        self.left_clicked = false;
        self.right_clicked = false;
        debug!(name = self.name(), "hotbox shown");
        self.window_origin_for(screen_cursor)
    }

    /// Hide the hotbox. Under "click or close" triggering the hovered
    /// shape fires its left action as the hotbox goes away, which lets a
    /// press-flick-release gesture both aim and trigger.
    pub fn hide(&mut self, executor: &mut dyn ActionExecutor) -> HideOutcome {
        if self.visible && self.general.triggering == Triggering::ClickOrClose {
            execute_hovered_shape(&self.shapes, true, false, executor);
        }
        self.visible = false;
        for shape in &mut self.shapes {
            shape.hovered = false;
            shape.clicked = false;
        }
        debug!(name = self.name(), "hotbox hidden");
        HideOutcome {
            hide_submenus: !self.general.submenu,
        }
    }
}
