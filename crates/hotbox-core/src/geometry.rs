//! Geometric primitives for the hotbox editor and reader.
//!
//! Provides rectangle algebra, resize-handle placement, linear remapping and
//! segment intersection tests. Everything works in document-local
//! coordinates; there is no viewport or device-pixel concept at this level.

use serde::{Deserialize, Serialize};

/// Side length of a resize handle square.
pub const POINT_RADIUS: f64 = 8.0;

/// Distance a handle sits outside the edge of the rectangle it decorates.
pub const POINT_OFFSET: f64 = 4.0;

/// Smallest reference span accepted by [`remap_rect`]. Reference rectangles
/// collapsed below this are widened to it so the remap never divides by zero.
pub const MIN_REFERENCE_SPAN: f64 = 1e-6;

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An axis-aligned rectangle defined by its top-left corner and dimensions.
///
/// Edge setters keep the opposite edge fixed, so `set_left` changes the
/// width while `set_width` keeps the top-left corner in place. Width and
/// height may transiently be negative during interactive manipulation; the
/// transform engine guards against committing inverted rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and dimensions.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a rectangle from its four edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Moves the left edge, keeping the right edge fixed.
    pub fn set_left(&mut self, left: f64) {
        let right = self.right();
        self.left = left;
        self.width = right - left;
    }

    /// Moves the right edge, keeping the left edge fixed.
    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.left;
    }

    /// Moves the top edge, keeping the bottom edge fixed.
    pub fn set_top(&mut self, top: f64) {
        let bottom = self.bottom();
        self.top = top;
        self.height = bottom - top;
    }

    /// Moves the bottom edge, keeping the top edge fixed.
    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.top;
    }

    /// Moves the top-left corner, keeping the bottom-right corner fixed.
    pub fn set_top_left(&mut self, point: Point) {
        self.set_left(point.x);
        self.set_top(point.y);
    }

    /// Moves the top-right corner, keeping the bottom-left corner fixed.
    pub fn set_top_right(&mut self, point: Point) {
        self.set_right(point.x);
        self.set_top(point.y);
    }

    /// Moves the bottom-left corner, keeping the top-right corner fixed.
    pub fn set_bottom_left(&mut self, point: Point) {
        self.set_left(point.x);
        self.set_bottom(point.y);
    }

    /// Moves the bottom-right corner, keeping the top-left corner fixed.
    pub fn set_bottom_right(&mut self, point: Point) {
        self.set_right(point.x);
        self.set_bottom(point.y);
    }

    /// Sets the width, keeping the left edge fixed.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Sets the height, keeping the top edge fixed.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Translates the rectangle so its top-left corner lands at `(x, y)`,
    /// preserving width and height.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.left = x;
        self.top = y;
    }

    /// Translates the rectangle by a delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.top += dy;
    }

    /// Translates the rectangle so its center lands on `point`.
    pub fn center_on(&mut self, point: Point) {
        self.left = point.x - self.width / 2.0;
        self.top = point.y - self.height / 2.0;
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

/// The eight resize-handle directions around a manipulated rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    /// All directions, in handle hit-test priority order.
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::BottomLeft,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];
}

/// Returns the handle square for `direction` on `rect`.
///
/// Each handle is a `POINT_RADIUS`-sided square centered on the corresponding
/// anchor point, offset outward by `POINT_OFFSET`. Corner handles are offset
/// on both axes, mid-side handles only on the axis pointing away from the
/// rectangle.
pub fn handle_rect(rect: &Rect, direction: Direction) -> Rect {
    let center = rect.center();
    let (cx, cy) = match direction {
        Direction::TopLeft => (rect.left - POINT_OFFSET, rect.top - POINT_OFFSET),
        Direction::BottomLeft => (rect.left - POINT_OFFSET, rect.bottom() + POINT_OFFSET),
        Direction::TopRight => (rect.right() + POINT_OFFSET, rect.top - POINT_OFFSET),
        Direction::BottomRight => (rect.right() + POINT_OFFSET, rect.bottom() + POINT_OFFSET),
        Direction::Left => (rect.left - POINT_OFFSET, center.y),
        Direction::Right => (rect.right() + POINT_OFFSET, center.y),
        Direction::Top => (center.x, rect.top - POINT_OFFSET),
        Direction::Bottom => (center.x, rect.bottom() + POINT_OFFSET),
    };
    Rect::new(
        cx - POINT_RADIUS / 2.0,
        cy - POINT_RADIUS / 2.0,
        POINT_RADIUS,
        POINT_RADIUS,
    )
}

/// Symmetrically inflates (or deflates, for negative `value`) a rectangle on
/// all four sides.
pub fn grow_rect(rect: &Rect, value: f64) -> Rect {
    Rect::new(
        rect.left - value,
        rect.top - value,
        rect.width + value * 2.0,
        rect.height + value * 2.0,
    )
}

/// Linearly remaps `value` from the `[in_min, in_max]` range to the
/// `[out_min, out_max]` range.
///
/// Degenerate input ranges (`in_min == in_max`) produce non-finite results;
/// callers must guard reference spans (see [`remap_rect`]).
pub fn relative(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let factor = (value - in_min) / (in_max - in_min);
    out_min + (out_max - out_min) * factor
}

/// Remaps each edge of `rect` from the coordinate frame of
/// `in_reference` to the frame of `out_reference`.
///
/// This is the proportional group transform: dependents scale with the
/// reference bounding box instead of translating uniformly. Reference spans
/// are clamped to [`MIN_REFERENCE_SPAN`] so a collapsed reference rectangle
/// never propagates NaN into shape rectangles.
pub fn remap_rect(rect: &mut Rect, in_reference: &Rect, out_reference: &Rect) {
    let in_w = in_reference.width.max(MIN_REFERENCE_SPAN);
    let in_h = in_reference.height.max(MIN_REFERENCE_SPAN);
    let left = relative(
        rect.left,
        in_reference.left,
        in_reference.left + in_w,
        out_reference.left,
        out_reference.right(),
    );
    let top = relative(
        rect.top,
        in_reference.top,
        in_reference.top + in_h,
        out_reference.top,
        out_reference.bottom(),
    );
    let right = relative(
        rect.right(),
        in_reference.left,
        in_reference.left + in_w,
        out_reference.left,
        out_reference.right(),
    );
    let bottom = relative(
        rect.bottom(),
        in_reference.top,
        in_reference.top + in_h,
        out_reference.top,
        out_reference.bottom(),
    );
    *rect = Rect::from_edges(left, top, right, bottom);
}

/// Tests whether segment `p1..p2` crosses segment `p3..p4`.
///
/// Uses the cross-product parametrization; parallel segments (zero
/// determinant) never cross, even when collinear and overlapping.
pub fn segment_cross_segment(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let (dx1, dy1) = (p2.x - p1.x, p2.y - p1.y);
    let (dx2, dy2) = (p4.x - p3.x, p4.y - p3.y);
    let (dx3, dy3) = (p1.x - p3.x, p1.y - p3.y);
    let d = dx1 * dy2 - dy1 * dx2;
    if d == 0.0 {
        return false;
    }
    let t1 = (dx2 * dy3 - dy2 * dx3) / d;
    if !(0.0..=1.0).contains(&t1) {
        return false;
    }
    let t2 = (dx1 * dy3 - dy1 * dx3) / d;
    (0.0..=1.0).contains(&t2)
}

/// Tests whether segment `p1..p2` crosses any of the four edges of `rect`.
pub fn segment_cross_rect(p1: Point, p2: Point, rect: &Rect) -> bool {
    segment_cross_segment(p1, p2, rect.top_left(), rect.top_right())
        || segment_cross_segment(p1, p2, rect.top_right(), rect.bottom_right())
        || segment_cross_segment(p1, p2, rect.bottom_right(), rect.bottom_left())
        || segment_cross_segment(p1, p2, rect.bottom_left(), rect.top_left())
}

/// A per-axis snapping grid. Steps are clamped to at least 1 so rounding is
/// always well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub x: f64,
    pub y: f64,
}

impl Snap {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.max(1.0),
            y: y.max(1.0),
        }
    }

    /// Rounds `x` and `y` to the nearest multiple of the respective step.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x * (x / self.x).round(), self.y * (y / self.y).round())
    }
}

/// Returns the smallest rectangle enclosing every rectangle in `rects`, or
/// `None` for an empty slice.
pub fn combined_rect(rects: &[Rect]) -> Option<Rect> {
    let first = rects.first()?;
    let mut left = first.left;
    let mut top = first.top;
    let mut right = first.right();
    let mut bottom = first.bottom();
    for rect in &rects[1..] {
        left = left.min(rect.left);
        top = top.min(rect.top);
        right = right.max(rect.right());
        bottom = bottom.max(rect.bottom());
    }
    Some(Rect::from_edges(left, top, right, bottom))
}
