//! Scale membership per semitone.
//!
//! Scale offsets are defined relative to a root of C; membership for any
//! other root is tested by transposing the semitone back by the root first.

use crate::constants::{OCTAVE, SEMITONES_PER_OCTAVE};
use crate::models::{HighlightVector, RootNote, ScaleDefinition};

/// Whether `semitone` (0 = C) belongs to `definition` played from `root`.
///
/// Computes `(semitone - root) mod 12` and checks it against the scale's
/// offsets. Any integer semitone is accepted and treated modulo 12.
#[must_use]
pub fn is_highlighted(semitone: i64, root: RootNote, definition: &ScaleDefinition) -> bool {
    let octave = i64::from(OCTAVE);
    let adjusted = (semitone.rem_euclid(octave) - i64::from(root.semitone())).rem_euclid(octave);
    u8::try_from(adjusted).is_ok_and(|offset| definition.contains(offset))
}

/// Membership for every semitone C..=B.
#[must_use]
pub fn highlight_vector(root: RootNote, definition: &ScaleDefinition) -> HighlightVector {
    let mut keys = [false; SEMITONES_PER_OCTAVE];
    for (semitone, key) in (0i64..).zip(keys.iter_mut()) {
        *key = is_highlighted(semitone, root, definition);
    }
    HighlightVector::from_array(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn root(semitone: i64) -> RootNote {
        RootNote::new(semitone).unwrap()
    }

    #[test]
    fn test_root_always_highlighted() {
        for scale in catalog::iter() {
            for r in RootNote::all() {
                assert!(
                    is_highlighted(i64::from(r.semitone()), r, scale),
                    "{} not lit in {} {}",
                    r,
                    r,
                    scale
                );
            }
        }
    }

    #[test]
    fn test_twelve_periodic() {
        for scale in catalog::iter() {
            for r in RootNote::all() {
                for s in -24..24 {
                    assert_eq!(
                        is_highlighted(s, r, scale),
                        is_highlighted(s + 12, r, scale),
                        "semitone {s} in {r} {scale}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_extreme_semitones_do_not_overflow() {
        let major = catalog::definition_of("Major").unwrap();
        // i64::MIN is 4 mod 12 and i64::MAX is 7 mod 12: both in C major.
        assert!(is_highlighted(i64::MIN, root(0), major));
        assert!(is_highlighted(i64::MAX, root(0), major));
        // Relative to B: 4 - 11 = 5 (in), 7 - 11 = 8 (out).
        assert!(is_highlighted(i64::MIN, root(11), major));
        assert!(!is_highlighted(i64::MAX, root(11), major));
    }

    #[test]
    fn test_b_major_wraps_around_c() {
        let major = catalog::definition_of("Major").unwrap();
        let b = root(11);
        assert!(!is_highlighted(0, b, major));
        assert!(is_highlighted(11, b, major));
        // B major: B C# D# E F# G# A#
        assert_eq!(
            highlight_vector(b, major).lit_semitones(),
            vec![1, 3, 4, 6, 8, 10, 11]
        );
    }

    #[test]
    fn test_c_blues_vector() {
        let blues = catalog::definition_of("Blues").unwrap();
        let expected = [
            true, false, false, true, false, true, true, true, false, false, true, false,
        ];
        assert_eq!(*highlight_vector(RootNote::C, blues).as_array(), expected);
    }

    #[test]
    fn test_lit_count_matches_scale_size() {
        for scale in catalog::iter() {
            for r in RootNote::all() {
                assert_eq!(highlight_vector(r, scale).count(), scale.len());
            }
        }
    }

    #[test]
    fn test_vector_matches_transposed_notes() {
        let dorian = catalog::definition_of("Dorian").unwrap();
        let d = root(2);
        let mut from_notes: Vec<u8> = dorian.notes(d).into_iter().map(RootNote::semitone).collect();
        from_notes.sort_unstable();
        assert_eq!(highlight_vector(d, dorian).lit_semitones(), from_notes);
    }

    #[test]
    fn test_chromatic_lights_everything() {
        let chromatic = catalog::definition_of("Chromatic").unwrap();
        assert!(highlight_vector(root(5), chromatic).iter().all(|lit| lit));
    }
}
