//! Settings persistence.
//!
//! Loads and saves the current selection as a small JSON document. Loading
//! never fails outward: anything short of a complete, well-typed document is
//! reported as absent. Saving replaces the document atomically so a reader
//! never sees a half-written file.

use crate::error::{Result, ScaleError};
use crate::models::PersistedSettings;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage for the persisted selection.
pub trait SettingsStore {
    /// Reads the stored settings, or `None` if there are none usable.
    fn load(&self) -> Option<PersistedSettings>;

    /// Replaces the stored settings.
    fn save(&self, settings: &PersistedSettings) -> Result<()>;
}

/// Settings stored as pretty-printed JSON at a caller-supplied path.
///
/// The path is opaque to the engine; choosing it is the host's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Creates a store for the document at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> anyhow::Result<PersistedSettings> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;

        let document: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", self.path.display()))?;

        PersistedSettings::from_document(&document).with_context(|| {
            format!(
                "Settings file is not a JSON object: {}",
                self.path.display()
            )
        })
    }

    /// Writes to a sibling temp file, then renames it over the target.
    fn write_atomic(&self, settings: &PersistedSettings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp settings file: {}", temp_path.display())
        })?;

        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err).with_context(|| {
                format!(
                    "Failed to rename temp settings file to: {}",
                    self.path.display()
                )
            });
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Option<PersistedSettings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No settings file, using defaults");
            return None;
        }

        match self.read() {
            Ok(settings) => {
                debug!(root = ?settings.root, scale = ?settings.scale, "Loaded settings");
                Some(settings)
            }
            Err(err) => {
                warn!("Could not load settings, using defaults: {err:#}");
                None
            }
        }
    }

    fn save(&self, settings: &PersistedSettings) -> Result<()> {
        self.write_atomic(settings)
            .map_err(|err| ScaleError::PersistenceUnavailable {
                path: self.path.clone(),
                reason: format!("{err:#}"),
            })?;

        debug!(path = %self.path.display(), root = ?settings.root, scale = ?settings.scale, "Saved settings");
        Ok(())
    }
}
