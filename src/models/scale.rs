//! Scale definitions: named interval patterns relative to a root of C.

use crate::constants::{OCTAVE, SEMITONES_PER_OCTAVE};
use crate::models::RootNote;
use std::fmt;

/// A named scale, stored as semitone offsets above its root.
///
/// Offsets are ascending, unique, within `0..=11`, and always start with `0`
/// (the root belongs to its own scale). Definitions are only built by the
/// catalog, which checks these rules in its tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleDefinition {
    name: &'static str,
    offsets: &'static [u8],
}

impl ScaleDefinition {
    /// Creates a definition. Used by the static catalog.
    pub(crate) const fn new(name: &'static str, offsets: &'static [u8]) -> Self {
        Self { name, offsets }
    }

    /// Catalog name, e.g. "Harmonic Minor".
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Semitone offsets above the root, ascending.
    #[must_use]
    pub const fn offsets(&self) -> &'static [u8] {
        self.offsets
    }

    /// Number of notes in the scale.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the scale has no notes. Never true for catalog entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether `offset` (semitones above the root) belongs to the scale.
    #[must_use]
    pub fn contains(&self, offset: u8) -> bool {
        self.offsets.contains(&offset)
    }

    /// Member pitch classes when the scale is played from `root`, in interval order.
    ///
    /// D Dorian gives D, E, F, G, A, B, C.
    #[must_use]
    pub fn notes(&self, root: RootNote) -> Vec<RootNote> {
        self.offsets
            .iter()
            .filter_map(|&offset| {
                let semitone = (i64::from(root.semitone()) + i64::from(offset))
                    .rem_euclid(i64::from(OCTAVE));
                RootNote::new(semitone).ok()
            })
            .collect()
    }

    /// Checks the offset rules: starts at 0, strictly ascending, below 12.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.offsets.first() == Some(&0)
            && self.offsets.windows(2).all(|pair| pair[0] < pair[1])
            && self
                .offsets
                .iter()
                .all(|&offset| usize::from(offset) < SEMITONES_PER_OCTAVE)
    }
}

impl fmt::Display for ScaleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
