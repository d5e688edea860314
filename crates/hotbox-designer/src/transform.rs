//! Cursor-driven transform engine for the shape editor.
//!
//! A gesture begins when the editor captures the manipulator rectangle,
//! then every mouse move resizes or translates that rectangle and the
//! delta is replayed onto each selected shape so the group keeps its
//! internal layout. The reference rectangle is reset after each
//! application, so transformations compose one mouse-move at a time.

use hotbox_core::geometry::{remap_rect, Direction, Point, Rect, Snap};

/// Resize `rect` by dragging the handle named by `direction` to `cursor`.
///
/// Each edge refuses to cross its opposite edge: the cursor is ignored on
/// the axis that would invert the rectangle, which keeps width and height
/// strictly positive throughout a drag. With `force_square` the rectangle
/// is squared after the resize; corner handles derive the horizontal
/// dimension from the vertical one, side handles copy the dragged
/// dimension onto the perpendicular one.
pub fn resize_rect_with_direction(
    rect: &mut Rect,
    cursor: Point,
    direction: Direction,
    force_square: bool,
) {
    match direction {
        Direction::TopLeft => {
            if cursor.x < rect.right() && cursor.y < rect.bottom() {
                rect.set_top_left(cursor);
                if force_square {
                    let left = rect.right() - rect.height;
                    rect.set_left(left);
                }
            }
        }
        Direction::BottomLeft => {
            if cursor.x < rect.right() && cursor.y > rect.top {
                rect.set_bottom_left(cursor);
                if force_square {
                    let left = rect.right() - rect.height;
                    rect.set_left(left);
                }
            }
        }
        Direction::TopRight => {
            if cursor.x > rect.left && cursor.y < rect.bottom() {
                rect.set_top_right(cursor);
                if force_square {
                    let right = rect.left + rect.height;
                    rect.set_right(right);
                }
            }
        }
        Direction::BottomRight => {
            if cursor.x > rect.left && cursor.y > rect.top {
                rect.set_bottom_right(cursor);
                if force_square {
                    let right = rect.left + rect.height;
                    rect.set_right(right);
                }
            }
        }
        Direction::Left => {
            if cursor.x < rect.right() {
                rect.set_left(cursor.x);
                if force_square {
                    rect.set_height(rect.width);
                }
            }
        }
        Direction::Right => {
            if cursor.x > rect.left {
                rect.set_right(cursor.x);
                if force_square {
                    rect.set_height(rect.width);
                }
            }
        }
        Direction::Top => {
            if cursor.y < rect.bottom() {
                rect.set_top(cursor.y);
                if force_square {
                    rect.set_width(rect.height);
                }
            }
        }
        Direction::Bottom => {
            if cursor.y > rect.top {
                rect.set_bottom(cursor.y);
                if force_square {
                    rect.set_width(rect.height);
                }
            }
        }
    }
}

/// Per-gesture transform state shared by resize and move interactions.
#[derive(Debug, Default)]
pub struct Transform {
    /// Grid applied to the cursor before any geometry change.
    pub snap: Option<Snap>,
    /// Handle being dragged, `None` while translating.
    pub direction: Option<Direction>,
    /// Constrain resizes to squares (shift held).
    pub square: bool,
    rect: Option<Rect>,
    reference_rect: Option<Rect>,
    reference_offset: Option<Point>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current manipulator rectangle driven by the gesture.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Capture the rectangle a gesture starts from. The same rectangle
    /// becomes the reference for the first relative application.
    pub fn set_rect(&mut self, rect: Option<Rect>) {
        self.rect = rect;
        self.reference_rect = rect;
        if rect.is_none() {
            self.reference_offset = None;
        }
    }

    /// Record where inside the rectangle the cursor grabbed it, so a
    /// translation keeps the grab point under the cursor.
    pub fn set_reference_point(&mut self, cursor: Point) {
        if let Some(rect) = self.rect {
            self.reference_offset = Some(Point::new(cursor.x - rect.left, cursor.y - rect.top));
        }
    }

    /// Resize the captured rectangle toward `cursor` and replay the
    /// change onto `rects`.
    pub fn resize(&mut self, rects: &mut [Rect], cursor: Point) {
        let Some(direction) = self.direction else {
            return;
        };
        let Some(mut rect) = self.rect else {
            return;
        };
        let cursor = self.snapped(cursor);
        resize_rect_with_direction(&mut rect, cursor, direction, self.square);
        self.rect = Some(rect);
        self.apply_relative_transformation(rects);
    }

    /// Translate the captured rectangle so the grab point follows
    /// `cursor`, then replay the change onto `rects`.
    pub fn move_to(&mut self, rects: &mut [Rect], cursor: Point) {
        let (Some(mut rect), Some(offset)) = (self.rect, self.reference_offset) else {
            return;
        };
        let target = self.snapped(Point::new(cursor.x - offset.x, cursor.y - offset.y));
        rect.move_to(target.x, target.y);
        self.rect = Some(rect);
        self.apply_relative_transformation(rects);
    }

    /// Remap every rectangle from the reference rectangle into the
    /// current one, preserving each shape's relative position and size
    /// within the group. The current rectangle becomes the next
    /// reference.
    pub fn apply_relative_transformation(&mut self, rects: &mut [Rect]) {
        let Some(rect) = self.rect else {
            return;
        };
        if let Some(reference) = self.reference_rect {
            for r in rects.iter_mut() {
                remap_rect(r, &reference, &rect);
            }
        }
        self.reference_rect = Some(rect);
    }

    fn snapped(&self, point: Point) -> Point {
        match &self.snap {
            Some(snap) => {
                let (x, y) = snap.apply(point.x, point.y);
                Point::new(x, y)
            }
            None => point,
        }
    }
}
