//! Error handling for Hotbox.
//!
//! All error types use `thiserror`. There is no fatal error class in this
//! core: every failure mode is either a silently-recovered default at load
//! time or a boolean-reported no-op, so these variants only surface at the
//! document and registry boundaries.

use thiserror::Error;

/// Document and registry error type.
#[derive(Error, Debug)]
pub enum DataError {
    /// No hotbox is registered under the given name
    #[error("Unknown hotbox: {name}")]
    UnknownHotbox {
        /// The name that was looked up.
        name: String,
    },

    /// Two sibling documents share a name
    #[error("Duplicate hotbox name: {name}")]
    DuplicateName {
        /// The duplicated name.
        name: String,
    },

    /// Document file could not be parsed
    #[error("Invalid hotbox file: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;
