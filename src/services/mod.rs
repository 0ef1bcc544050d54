//! Service layer for business logic.
//!
//! Highlight calculation and settings persistence, kept apart from the
//! engine that composes them.

pub mod highlight;
pub mod settings_store;

// Re-export commonly used types and functions
pub use highlight::{highlight_vector, is_highlighted};
pub use settings_store::{JsonSettingsStore, SettingsStore};
