//! Key extraction — enumerate the addressable key paths of a document.
//!
//! Paths are emitted depth-first, pre-order, in the mapping's insertion
//! order. Arrays never produce a path of their own and their indices never
//! appear; the first element stands in for the whole array.

use serde_json::{Map, Value};

use crate::key_path::KeyPath;

/// List every key path present in `document`.
///
/// # Example
///
/// ```
/// use json_edgecase_core::extract_keys;
/// use serde_json::json;
///
/// let keys = extract_keys(&json!({"a": [{"b": 1}, {"b": 2, "c": 3}]}));
/// let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, vec!["a", "a.b"]);
/// ```
pub fn extract_keys(document: &Value) -> Vec<KeyPath> {
    let mut keys = Vec::new();
    collect_keys(document, &KeyPath::root(), &mut keys);
    tracing::debug!(count = keys.len(), "extracted key paths");
    keys
}

/// Dotted-string form of [`extract_keys`], as shown in a key selector.
pub fn extract_key_strings(document: &Value) -> Vec<String> {
    extract_keys(document)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn collect_keys(node: &Value, prefix: &KeyPath, out: &mut Vec<KeyPath>) {
    match node {
        Value::Object(map) => collect_object_keys(map, prefix, out),
        Value::Array(items) => {
            // Only a composite first element contributes further paths.
            if let Some(first @ (Value::Object(_) | Value::Array(_))) = items.first() {
                collect_keys(first, prefix, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

fn collect_object_keys(map: &Map<String, Value>, prefix: &KeyPath, out: &mut Vec<KeyPath>) {
    for (key, value) in map {
        let path = prefix.child(key);
        out.push(path.clone());
        collect_keys(value, &path, out);
    }
}
