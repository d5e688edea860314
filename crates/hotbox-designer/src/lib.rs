//! Interactive editing of hotbox documents.
//!
//! The editor is headless: `ShapeEditor` consumes a pointer protocol and
//! produces document snapshots, leaving painting and windowing to the
//! host. The pieces compose bottom-up: the transform engine reshapes
//! rectangle groups, the selection tracks picked shapes under modifier
//! modes, the manipulator frames them with resize handles, and the undo
//! manager snapshots the document once per gesture.

pub mod arrange;
pub mod editor;
pub mod history;
pub mod manipulator;
pub mod selection;
pub mod templates;
pub mod transform;

pub use editor::{EditorShape, ShapeEditor};
pub use history::UndoManager;
pub use manipulator::{Manipulator, SelectionSquare};
pub use selection::{Selection, SelectionMode, ShapeId};
pub use transform::{resize_rect_with_direction, Transform};
