//! The per-semitone highlight result handed to renderers.

use crate::constants::SEMITONES_PER_OCTAVE;
use std::ops::Index;

/// Scale membership for each semitone of one octave, index 0 = C.
///
/// Derived from the current selection on every request; never stored.
/// Which widget a semitone maps to (white or black key, position) is up to
/// the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HighlightVector([bool; SEMITONES_PER_OCTAVE]);

impl HighlightVector {
    /// Wraps a raw membership array.
    #[must_use]
    pub const fn from_array(keys: [bool; SEMITONES_PER_OCTAVE]) -> Self {
        Self(keys)
    }

    /// Raw membership array.
    #[must_use]
    pub const fn as_array(&self) -> &[bool; SEMITONES_PER_OCTAVE] {
        &self.0
    }

    /// Whether `semitone` is lit. Out-of-octave semitones are never lit.
    #[must_use]
    pub fn is_lit(&self, semitone: usize) -> bool {
        self.0.get(semitone).copied().unwrap_or(false)
    }

    /// Iterates membership flags from C to B.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Semitones that are lit, ascending.
    #[must_use]
    pub fn lit_semitones(&self) -> Vec<u8> {
        (0u8..)
            .zip(self.0.iter())
            .filter_map(|(semitone, &lit)| lit.then_some(semitone))
            .collect()
    }

    /// Number of lit semitones.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }

    /// One character per semitone: `X` for lit, `.` otherwise.
    #[must_use]
    pub fn to_marker_string(&self) -> String {
        self.0.iter().map(|&lit| if lit { 'X' } else { '.' }).collect()
    }
}

impl Index<usize> for HighlightVector {
    type Output = bool;

    fn index(&self, semitone: usize) -> &bool {
        &self.0[semitone]
    }
}

impl From<HighlightVector> for [bool; SEMITONES_PER_OCTAVE] {
    fn from(vector: HighlightVector) -> Self {
        vector.0
    }
}
