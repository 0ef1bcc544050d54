//! ScaleKeys Library
//!
//! This library provides the scale engine behind a one-octave keyboard
//! display: the catalog of named scales, root-note handling, the per-semitone
//! highlight calculation, and persistence of the current selection.
//!
//! ```no_run
//! use scalekeys::ScaleEngine;
//!
//! let mut engine = ScaleEngine::initialize("/tmp/scalekeys/settings.json");
//! let highlight = engine.change_scale("Blues")?;
//! assert!(highlight[0]);
//! # Ok::<(), scalekeys::ScaleError>(())
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;

pub use engine::{HighlightObserver, ScaleEngine, ScaleState};
pub use error::ScaleError;
pub use models::{HighlightVector, PersistedSettings, RootNote, ScaleDefinition, Selection};
