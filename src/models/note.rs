//! Root notes (pitch classes) and their names.

use crate::constants::{OCTAVE, SEMITONES_PER_OCTAVE};
use crate::error::{Result, ScaleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Combined spellings, indexed by semitone above C.
const COMBINED_NAMES: [&str; SEMITONES_PER_OCTAVE] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

const SHARP_NAMES: [&str; SEMITONES_PER_OCTAVE] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; SEMITONES_PER_OCTAVE] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// How accidentals are spelled when a note name is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accidentals {
    /// Both spellings, e.g. "C#/Db"
    #[default]
    Both,
    /// Sharp spelling only, e.g. "C#"
    Sharps,
    /// Flat spelling only, e.g. "Db"
    Flats,
}

impl Accidentals {
    /// Parses a display preference ("both", "sharps" or "flats"), ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "both" => Some(Self::Both),
            "sharps" | "sharp" => Some(Self::Sharps),
            "flats" | "flat" => Some(Self::Flats),
            _ => None,
        }
    }
}

impl fmt::Display for Accidentals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "both"),
            Self::Sharps => write!(f, "sharps"),
            Self::Flats => write!(f, "flats"),
        }
    }
}

/// A root note: the pitch class a scale is built on, as semitones above C.
///
/// Always within `0..=11`. Construct with [`RootNote::new`] or
/// [`RootNote::from_name`]; both reject anything outside one octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RootNote(u8);

impl RootNote {
    /// C, the default root.
    pub const C: Self = Self(0);

    /// Creates a root note from a semitone offset above C.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidRoot`] if `semitone` is not in `0..=11`.
    pub fn new(semitone: i64) -> Result<Self> {
        u8::try_from(semitone)
            .ok()
            .filter(|&s| s < OCTAVE)
            .map(Self)
            .ok_or(ScaleError::InvalidRoot(semitone))
    }

    /// Semitone offset above C.
    #[must_use]
    pub const fn semitone(self) -> u8 {
        self.0
    }

    /// Combined display name, e.g. "F#/Gb".
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spelled(Accidentals::Both)
    }

    /// Display name using the given accidental spelling.
    #[must_use]
    pub fn spelled(self, accidentals: Accidentals) -> &'static str {
        let index = usize::from(self.0);
        match accidentals {
            Accidentals::Both => COMBINED_NAMES[index],
            Accidentals::Sharps => SHARP_NAMES[index],
            Accidentals::Flats => FLAT_NAMES[index],
        }
    }

    /// All twelve root notes, C first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..OCTAVE).map(Self)
    }

    /// Parses a note name such as "C", "f#", "Bb", "E♭" or "C#/Db".
    ///
    /// Letters are case-insensitive. Up to two accidentals are accepted and
    /// wrap around the octave ("Cb" is B). A combined "X/Y" name only parses
    /// when both halves name the same pitch class.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('♯', "#").replace('♭', "b");
        let mut parts = normalized.split('/');
        let first = parse_single_name(parts.next()?)?;

        for part in parts {
            if parse_single_name(part)? != first {
                return None;
            }
        }

        Some(first)
    }
}

fn parse_single_name(name: &str) -> Option<RootNote> {
    let mut chars = name.trim().chars();
    let base: i64 = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut offset = 0i64;
    let mut count = 0;
    for c in chars {
        offset += match c {
            '#' => 1,
            'b' | 'B' => -1,
            _ => return None,
        };
        count += 1;
    }

    if count > 2 {
        return None;
    }

    RootNote::new((base + offset).rem_euclid(i64::from(OCTAVE))).ok()
}

impl TryFrom<i64> for RootNote {
    type Error = ScaleError;

    fn try_from(semitone: i64) -> Result<Self> {
        Self::new(semitone)
    }
}

impl From<RootNote> for u8 {
    fn from(root: RootNote) -> Self {
        root.0
    }
}

impl fmt::Display for RootNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
