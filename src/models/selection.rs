//! Snapshot of the current root and scale.

use crate::models::{RootNote, ScaleDefinition};
use std::fmt;

/// Read-only view of the engine's current root and scale.
///
/// The scale is a catalog entry, so a `Selection` can never name a scale the
/// catalog does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    root: RootNote,
    scale: &'static ScaleDefinition,
}

impl Selection {
    pub(crate) const fn new(root: RootNote, scale: &'static ScaleDefinition) -> Self {
        Self { root, scale }
    }

    /// Current root note.
    #[must_use]
    pub const fn root(&self) -> RootNote {
        self.root
    }

    /// Current scale definition.
    #[must_use]
    pub const fn scale(&self) -> &'static ScaleDefinition {
        self.scale
    }

    /// Current scale name.
    #[must_use]
    pub const fn scale_name(&self) -> &'static str {
        self.scale.name()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale)
    }
}
