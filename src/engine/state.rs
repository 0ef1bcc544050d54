//! The current selection and its validated transitions.

use crate::catalog;
use crate::error::Result;
use crate::models::{PersistedSettings, RootNote, Selection};
use tracing::info;

/// Current root and scale.
///
/// Every transition is validated before it is applied, so the state always
/// holds a root in `0..=11` and a scale from the catalog. A failed transition
/// leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleState {
    current: Selection,
}

impl ScaleState {
    /// Creates the state for an already-validated selection.
    pub const fn new(current: Selection) -> Self {
        Self { current }
    }

    /// C major.
    pub fn default_selection() -> Selection {
        Selection::new(RootNote::C, catalog::default_scale())
    }

    /// Builds the state from loaded settings, falling back field by field.
    ///
    /// No settings gives C major. A missing or out-of-range root falls back
    /// to C, a missing or unknown scale falls back to Major; a valid field is
    /// kept either way.
    pub fn restore(settings: Option<&PersistedSettings>) -> Self {
        let Some(settings) = settings else {
            info!("Using default selection");
            return Self::new(Self::default_selection());
        };

        let root = match settings.root {
            Some(root) => RootNote::new(root).unwrap_or_else(|err| {
                info!("Ignoring stored root: {err}");
                RootNote::C
            }),
            None => {
                info!("No usable stored root, using C");
                RootNote::C
            }
        };
        let scale = match settings.scale.as_deref() {
            Some(name) => catalog::resolve(name).unwrap_or_else(|err| {
                info!("Ignoring stored scale: {err}");
                catalog::default_scale()
            }),
            None => {
                info!("No usable stored scale, using the default");
                catalog::default_scale()
            }
        };

        Self::new(Selection::new(root, scale))
    }

    /// Read-only snapshot.
    pub const fn current(&self) -> Selection {
        self.current
    }

    /// Replaces the root.
    ///
    /// # Errors
    ///
    /// [`ScaleError::InvalidRoot`](crate::ScaleError::InvalidRoot) if
    /// `new_root` is outside `0..=11`.
    pub fn set_root(&mut self, new_root: i64) -> Result<Selection> {
        let root = RootNote::new(new_root)?;
        self.current = Selection::new(root, self.current.scale());
        Ok(self.current)
    }

    /// Replaces the scale.
    ///
    /// # Errors
    ///
    /// [`ScaleError::UnknownScale`](crate::ScaleError::UnknownScale) if the
    /// catalog has no scale called `new_scale`.
    pub fn set_scale(&mut self, new_scale: &str) -> Result<Selection> {
        let scale = catalog::resolve(new_scale)?;
        self.current = Selection::new(self.current.root(), scale);
        Ok(self.current)
    }

    /// The persisted form of the current selection.
    pub fn to_settings(&self) -> PersistedSettings {
        PersistedSettings::from(self.current)
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::new(Self::default_selection())
    }
}
