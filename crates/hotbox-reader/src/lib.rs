//! Hotbox runtime: shows documents produced by the designer and turns
//! cursor motion and clicks into action execution.
//!
//! The crate is headless. Hosts own windows, painting and hotkeys; they
//! feed local cursor positions and button transitions into a
//! [`HotboxReader`] and run commands through their [`ActionExecutor`].

pub mod activation;
pub mod reader;
pub mod registry;

pub use activation::{
    execute_hovered_shape, set_crossed_shapes_hovered, set_shapes_hovered, ActionExecutor,
    ReaderShape,
};
pub use reader::{HideOutcome, HotboxReader};
pub use registry::HotboxRegistry;
