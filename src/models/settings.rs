//! On-disk projection of the current selection.

use crate::constants::{DEFAULT_ROOT, DEFAULT_SCALE};
use crate::models::Selection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The settings document, `{ "root": 0..=11, "scale": "<name>" }`.
///
/// Stored values are not trusted: the engine re-validates both fields when it
/// builds its state from a loaded document. A field that is missing or of
/// the wrong type is `None`; the other field is still usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    /// Root as semitones above C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<i64>,
    /// Scale catalog name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

impl PersistedSettings {
    /// Creates a settings document with both fields present.
    pub fn new(root: i64, scale: impl Into<String>) -> Self {
        Self {
            root: Some(root),
            scale: Some(scale.into()),
        }
    }

    /// Extracts the fields of a parsed settings document one by one.
    ///
    /// Returns `None` unless the document is a JSON object. Inside an object,
    /// `root` must be an integer that fits `i64` and `scale` must be a string;
    /// anything else leaves that field empty without affecting the other.
    pub fn from_document(document: &Value) -> Option<Self> {
        let object = document.as_object()?;
        Some(Self {
            root: object.get("root").and_then(Value::as_i64),
            scale: object.get("scale").and_then(Value::as_str).map(str::to_string),
        })
    }
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::new(i64::from(DEFAULT_ROOT), DEFAULT_SCALE)
    }
}

impl From<Selection> for PersistedSettings {
    fn from(selection: Selection) -> Self {
        Self::new(
            i64::from(selection.root().semitone()),
            selection.scale().name(),
        )
    }
}
