//! Error taxonomy for the scale engine.
//!
//! `InvalidRoot` and `UnknownScale` are caller-contract violations and are
//! returned to whoever asked for the change. `PersistenceUnavailable` is
//! produced by settings stores; the engine logs it and carries on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the scale engine and its components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Root note outside 0..=11.
    #[error("invalid root note {0}: expected a semitone between 0 (C) and 11 (B)")]
    InvalidRoot(i64),

    /// Scale name not present in the catalog.
    #[error("unknown scale '{0}'")]
    UnknownScale(String),

    /// Settings could not be read or written.
    #[error("settings unavailable at {}: {reason}", path.display())]
    PersistenceUnavailable {
        /// Location of the settings document
        path: PathBuf,
        /// Underlying cause, flattened to text
        reason: String,
    },
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, ScaleError>;
