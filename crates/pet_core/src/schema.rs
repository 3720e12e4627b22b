//! Required-field presence checks for pet save documents.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::CoreError;

/// Dotted paths every save document must contain, in report order.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "schemaVersion",
    "stats.hunger",
    "stats.happiness",
    "stats.cleanliness",
    "stats.health",
    "stage",
    "exp",
    "lastSeenTimestamp",
];

/// Reads and parses a save file from disk.
pub fn load_save(path: &Path) -> Result<Value, CoreError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CoreError::io(format!("cannot read save file: {e}")))?;
    parse_save(&text)
}

/// Parses save-file text as JSON.
pub fn parse_save(text: &str) -> Result<Value, CoreError> {
    serde_json::from_str(text).map_err(|e| CoreError::parse(format!("invalid save JSON: {e}")))
}

/// True if every segment of the dotted `path` resolves through JSON objects.
///
/// The final segment only has to exist as a key; its value may be anything,
/// `null` included. Traversal stops as soon as an intermediate value is not
/// an object, so `stats.hunger` is missing when `stats` is, say, a string.
pub fn has_path(doc: &Value, path: &str) -> bool {
    let mut current = doc;
    for segment in path.split('.') {
        match current.as_object().and_then(|map| map.get(segment)) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

/// Required paths absent from `doc`, in [`REQUIRED_FIELDS`] order.
pub fn missing_fields(doc: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|path| !has_path(doc, path))
        .collect()
}
