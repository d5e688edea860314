//! Hover activation and action dispatch for a shown hotbox.
//!
//! Two activation modes exist. Direct mode hovers the shape under the
//! cursor, topmost first. Aiming mode casts a ray from the hotbox pivot
//! through the cursor and hovers the nearest interactive shape the ray
//! crosses, so a flick toward a button activates it without reaching it.

use hotbox_core::geometry::{segment_cross_rect, Point, Rect};
use hotbox_core::{Language, ShapeData};
use tracing::warn;

/// Host hook that runs a shape's command in its scripting language.
pub trait ActionExecutor {
    fn execute(&mut self, language: Language, command: &str) -> anyhow::Result<()>;
}

/// A document shape with its runtime hover and click state.
#[derive(Debug, Clone)]
pub struct ReaderShape {
    pub data: ShapeData,
    pub hovered: bool,
    pub clicked: bool,
}

impl ReaderShape {
    pub fn new(data: ShapeData) -> Self {
        Self {
            data,
            hovered: false,
            clicked: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.data.rect()
    }

    pub fn is_interactive(&self) -> bool {
        self.data.is_interactive()
    }
}

fn set_exclusive_hover(shapes: &mut [ReaderShape], hovered: Option<usize>, clicked: bool) {
    for (index, shape) in shapes.iter_mut().enumerate() {
        shape.hovered = Some(index) == hovered;
        shape.clicked = shape.hovered && clicked;
    }
}

/// Direct activation: hover the topmost interactive shape containing the
/// cursor. At most one shape is hovered at a time.
pub fn set_shapes_hovered(shapes: &mut [ReaderShape], cursor: Point, clicked: bool) {
    let hovered = shapes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, shape)| shape.is_interactive() && shape.rect().contains(&cursor))
        .map(|(index, _)| index);
    set_exclusive_hover(shapes, hovered, clicked);
}

/// Aiming activation. A shape directly under the cursor wins outright.
/// Otherwise the segment from `pivot` to `cursor` is tested against
/// every interactive shape's rectangle, and among the crossed shapes the
/// one whose center is nearest the cursor is hovered. Ties keep the
/// first shape in document order.
pub fn set_crossed_shapes_hovered(
    shapes: &mut [ReaderShape],
    pivot: Point,
    cursor: Point,
    clicked: bool,
) {
    let direct = shapes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, shape)| shape.is_interactive() && shape.rect().contains(&cursor))
        .map(|(index, _)| index);
    if direct.is_some() {
        set_exclusive_hover(shapes, direct, clicked);
        return;
    }

    let mut nearest: Option<(usize, f64)> = None;
    for (index, shape) in shapes.iter().enumerate() {
        if !shape.is_interactive() {
            continue;
        }
        let rect = shape.rect();
        if !segment_cross_rect(pivot, cursor, &rect) {
            continue;
        }
        let distance = rect.center().distance_to(&cursor);
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((index, distance));
        }
    }
    set_exclusive_hover(shapes, nearest.map(|(index, _)| index), clicked);
}

/// Fire the hovered shape's actions for the released buttons. Shapes are
/// scanned in document order and at most one executes. Returns whether
/// the executed shape asks the hotbox to close.
pub fn execute_hovered_shape(
    shapes: &[ReaderShape],
    left: bool,
    right: bool,
    executor: &mut dyn ActionExecutor,
) -> bool {
    for shape in shapes {
        if !shape.is_interactive() || !shape.hovered {
            continue;
        }
        for (released, button) in [
            (left, hotbox_core::MouseButton::Left),
            (right, hotbox_core::MouseButton::Right),
        ] {
            if released && shape.data.has_action(button) {
                let (command, language) = shape.data.action(button);
                if let Err(error) = executor.execute(language, command) {
                    warn!(%error, ?language, "shape action failed");
                }
            }
        }
        return shape.data.autoclose(left, right);
    }
    false
}
