//! The scale engine: the contract a keyboard renderer talks to.
//!
//! A renderer (panel applet, terminal host, anything else) drives the engine
//! with root and scale changes and gets back a [`HighlightVector`] to paint.
//! The engine owns the selection, persists it after every successful change,
//! and tells subscribed observers about the new highlight.
//!
//! Persistence is best-effort. A failed load starts from C major; a failed
//! save is logged and the in-memory selection stays authoritative.

pub mod state;

pub use state::ScaleState;

use crate::error::Result;
use crate::models::{HighlightVector, Selection};
use crate::services::{highlight_vector, JsonSettingsStore, SettingsStore};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Receives the new highlight after every successful transition.
pub trait HighlightObserver {
    /// Called with the new selection and its highlight vector.
    fn highlight_changed(&mut self, selection: Selection, highlight: &HighlightVector);
}

impl<F> HighlightObserver for F
where
    F: FnMut(Selection, &HighlightVector),
{
    fn highlight_changed(&mut self, selection: Selection, highlight: &HighlightVector) {
        self(selection, highlight);
    }
}

/// Owns the current selection and mediates every change to it.
pub struct ScaleEngine<S: SettingsStore = JsonSettingsStore> {
    state: ScaleState,
    store: S,
    observers: Vec<Box<dyn HighlightObserver>>,
}

impl ScaleEngine<JsonSettingsStore> {
    /// Starts an engine backed by the JSON settings document at `settings_path`.
    ///
    /// Never fails: unreadable or invalid settings degrade to defaults.
    pub fn initialize(settings_path: impl Into<PathBuf>) -> Self {
        Self::with_store(JsonSettingsStore::new(settings_path))
    }
}

impl<S: SettingsStore> ScaleEngine<S> {
    /// Starts an engine on top of any settings store.
    pub fn with_store(store: S) -> Self {
        let state = ScaleState::restore(store.load().as_ref());
        debug!(selection = %state.current(), "Scale engine ready");

        Self {
            state,
            store,
            observers: Vec::new(),
        }
    }

    /// Changes the root note and returns the new highlight.
    ///
    /// # Errors
    ///
    /// [`ScaleError::InvalidRoot`](crate::ScaleError::InvalidRoot) if
    /// `new_root` is outside `0..=11`; the selection is left as it was.
    pub fn change_root(&mut self, new_root: i64) -> Result<HighlightVector> {
        self.state.set_root(new_root)?;
        Ok(self.commit())
    }

    /// Changes the scale and returns the new highlight.
    ///
    /// # Errors
    ///
    /// [`ScaleError::UnknownScale`](crate::ScaleError::UnknownScale) if the
    /// catalog has no such scale; the selection is left as it was.
    pub fn change_scale(&mut self, new_scale: &str) -> Result<HighlightVector> {
        self.state.set_scale(new_scale)?;
        Ok(self.commit())
    }

    /// Highlight for the current selection, recomputed on every call.
    pub fn current_highlight(&self) -> HighlightVector {
        let current = self.state.current();
        highlight_vector(current.root(), current.scale())
    }

    /// Current root and scale.
    pub fn current(&self) -> Selection {
        self.state.current()
    }

    /// Registers an observer for future transitions.
    pub fn subscribe(&mut self, observer: impl HighlightObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The backing settings store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persists, then notifies. Runs only after a transition succeeded.
    fn commit(&mut self) -> HighlightVector {
        let selection = self.state.current();
        debug!(%selection, "Selection changed");

        if let Err(err) = self.store.save(&self.state.to_settings()) {
            warn!("Could not save settings: {err}");
        }

        let highlight = self.current_highlight();
        for observer in &mut self.observers {
            observer.highlight_changed(selection, &highlight);
        }
        highlight
    }
}
