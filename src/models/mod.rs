//! Data models for root notes, scales, selections and highlight results.
//!
//! Models are independent of storage and presentation.

pub mod highlight;
pub mod note;
pub mod scale;
pub mod selection;
pub mod settings;

// Re-export all model types
pub use highlight::HighlightVector;
pub use note::{Accidentals, RootNote};
pub use scale::ScaleDefinition;
pub use selection::Selection;
pub use settings::PersistedSettings;
