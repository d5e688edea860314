//! Selection frame with resize handles, and the rubber-band square used
//! to select by region.

use hotbox_core::geometry::{combined_rect, handle_rect, Direction, Point, Rect};

/// The frame drawn around the current selection. Wraps the combined
/// bounding rectangle and resolves which part of the frame a cursor
/// position addresses.
#[derive(Debug, Default)]
pub struct Manipulator {
    rect: Option<Rect>,
}

impl Manipulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    /// Fit the frame to the combined bounds of `rects`. An empty slice
    /// hides the frame.
    pub fn update_from(&mut self, rects: &[Rect]) {
        self.rect = combined_rect(rects);
    }

    /// The hit zone of one resize handle, `None` while no selection is
    /// framed.
    pub fn handle_rect(&self, direction: Direction) -> Option<Rect> {
        self.rect.map(|rect| handle_rect(&rect, direction))
    }

    /// Which handle the cursor is over. Handles are probed in priority
    /// order so corners win over the sides they overlap.
    pub fn direction_at(&self, cursor: Point) -> Option<Direction> {
        let rect = self.rect?;
        Direction::ALL
            .iter()
            .copied()
            .find(|&direction| handle_rect(&rect, direction).contains(&cursor))
    }

    /// Whether the cursor is inside the frame body.
    pub fn contains(&self, cursor: Point) -> bool {
        self.rect.is_some_and(|rect| rect.contains(&cursor))
    }
}

/// Rubber-band rectangle dragged over empty space to select by region.
#[derive(Debug, Default)]
pub struct SelectionSquare {
    origin: Option<Point>,
    rect: Option<Rect>,
}

impl SelectionSquare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handling(&self) -> bool {
        self.origin.is_some()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn press(&mut self, cursor: Point) {
        self.origin = Some(cursor);
        self.rect = Some(Rect::new(cursor.x, cursor.y, 0.0, 0.0));
    }

    /// Stretch the band between the press origin and the cursor. The
    /// stored rectangle is normalized so intersection tests work in any
    /// drag direction.
    pub fn drag(&mut self, cursor: Point) {
        if let Some(origin) = self.origin {
            self.rect = Some(Rect::from_edges(
                origin.x.min(cursor.x),
                origin.y.min(cursor.y),
                origin.x.max(cursor.x),
                origin.y.max(cursor.y),
            ));
        }
    }

    pub fn release(&mut self) {
        self.origin = None;
        self.rect = None;
    }
}
