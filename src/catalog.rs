//! The scale catalog.
//!
//! A fixed, process-wide table of named scales. Entries may be added but the
//! offsets of existing entries are part of the documented behavior and must
//! not change. Order is the order a scale menu lists them in.

use crate::constants::DEFAULT_SCALE;
use crate::error::{Result, ScaleError};
use crate::models::ScaleDefinition;

static SCALES: [ScaleDefinition; 12] = [
    ScaleDefinition::new("Major", &[0, 2, 4, 5, 7, 9, 11]),
    ScaleDefinition::new("Natural Minor", &[0, 2, 3, 5, 7, 8, 10]),
    ScaleDefinition::new("Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11]),
    ScaleDefinition::new("Dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ScaleDefinition::new("Phrygian", &[0, 1, 3, 5, 7, 8, 10]),
    ScaleDefinition::new("Lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ScaleDefinition::new("Mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ScaleDefinition::new("Locrian", &[0, 1, 3, 5, 6, 8, 10]),
    ScaleDefinition::new("Pentatonic Major", &[0, 2, 4, 7, 9]),
    ScaleDefinition::new("Pentatonic Minor", &[0, 3, 5, 7, 10]),
    ScaleDefinition::new("Blues", &[0, 3, 5, 6, 7, 10]),
    ScaleDefinition::new("Chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
];

/// Looks up a scale by name.
///
/// An exact match wins; otherwise the first case-insensitive match is used,
/// so "blues" resolves to "Blues".
pub fn definition_of(name: &str) -> Option<&'static ScaleDefinition> {
    let name = name.trim();
    SCALES
        .iter()
        .find(|scale| scale.name() == name)
        .or_else(|| {
            SCALES
                .iter()
                .find(|scale| scale.name().eq_ignore_ascii_case(name))
        })
}

/// Looks up a scale by name, failing with [`ScaleError::UnknownScale`].
pub fn resolve(name: &str) -> Result<&'static ScaleDefinition> {
    definition_of(name).ok_or_else(|| ScaleError::UnknownScale(name.to_string()))
}

/// The scale used when nothing valid was persisted.
pub fn default_scale() -> &'static ScaleDefinition {
    definition_of(DEFAULT_SCALE).unwrap_or(&SCALES[0])
}

/// Every catalog entry, in menu order.
pub fn iter() -> impl Iterator<Item = &'static ScaleDefinition> {
    SCALES.iter()
}

/// Every catalog name, in menu order.
pub fn names() -> impl Iterator<Item = &'static str> {
    SCALES.iter().map(ScaleDefinition::name)
}
