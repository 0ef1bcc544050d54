//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the engine defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ScaleKeys";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "scalekeys";

/// Environment variable that overrides the host configuration directory.
pub const CONFIG_DIR_ENV: &str = "SCALEKEYS_CONFIG_DIR";

/// File name of the persisted selection inside the configuration directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Number of pitch classes in one octave, for semitone arithmetic.
pub const OCTAVE: u8 = 12;

/// Number of pitch classes in one octave, for array lengths and indexing.
pub const SEMITONES_PER_OCTAVE: usize = 12;

/// Root used when nothing valid was persisted (C).
pub const DEFAULT_ROOT: u8 = 0;

/// Scale used when nothing valid was persisted.
pub const DEFAULT_SCALE: &str = "Major";
