//! # Hotbox Core
//!
//! Shared foundations for the hotbox designer and reader:
//!
//! - **Geometry**: rectangle algebra, resize-handle placement, linear
//!   remapping, segment intersection and grid snapping
//!   ([`geometry`]).
//! - **Document model**: the typed hotbox schema (general settings plus an
//!   ordered, z-layered shape list) and its JSON persistence with legacy
//!   upgrades ([`document`]).
//! - **Errors**: document and registry error types ([`error`]).
//!
//! Everything here is synchronous and owns no host resources; windowing,
//! painting and script execution live behind seams in the consumer crates.

pub mod document;
pub mod error;
pub mod geometry;

pub use document::{
    load_hotboxes, save_hotboxes, unique_name, validate_unique_names, GeneralOptions, Halign,
    HotboxData, Language, MouseButton, ShapeData, ShapeKind, Triggering, Valign,
};
pub use error::{DataError, Result};
pub use geometry::{
    combined_rect, grow_rect, handle_rect, relative, remap_rect, segment_cross_rect,
    segment_cross_segment, Direction, Point, Rect, Snap, POINT_OFFSET, POINT_RADIUS,
};
