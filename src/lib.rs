//! # Hotbox
//!
//! A hotbox (radial overlay menu) designer and runtime for 3D
//! content-creation applications.
//!
//! ## Architecture
//!
//! Hotbox is organized as a workspace with multiple crates:
//!
//! 1. **hotbox-core** - Geometry primitives, the document model, file IO
//! 2. **hotbox-designer** - Headless editing session: transforms,
//!    selection, manipulator, undo history
//! 3. **hotbox-reader** - Runtime: hover activation, aiming, action
//!    dispatch, the named registry
//! 4. **hotbox** - Main binary: inspects and validates hotbox files
//!
//! Both the designer and the reader are headless. Hosts own windows,
//! painting and hotkeys; this workspace owns the geometry, the document
//! semantics and the interaction protocols.

pub use hotbox_core::geometry;

pub use hotbox_core::{
    load_hotboxes, save_hotboxes, unique_name, validate_unique_names, DataError, GeneralOptions,
    Halign, HotboxData, Language, MouseButton, Result, ShapeData, ShapeKind, Triggering, Valign,
};

pub use hotbox_designer::{
    EditorShape, Manipulator, Selection, SelectionMode, SelectionSquare, ShapeEditor, ShapeId,
    Transform, UndoManager,
};

pub use hotbox_reader::{ActionExecutor, HideOutcome, HotboxReader, HotboxRegistry, ReaderShape};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
