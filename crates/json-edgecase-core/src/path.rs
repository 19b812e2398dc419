//! Path accessor — get, set and delete a value at a [`KeyPath`].
//!
//! Before every field access, an array node is replaced by its first
//! element (repeatedly, for directly nested arrays). `set` synthesises an
//! empty object inside an empty array so the assignment has somewhere to
//! land; `get` and `delete` treat an empty array as "not found".
//!
//! None of these functions copy: they act on the value they are handed.
//! Missing intermediates are never an error, the call simply does nothing.

use serde_json::{Map, Value};

use crate::key_path::KeyPath;

/// Resolve `path` inside `document`.
///
/// The empty path resolves to `document` itself. Returns `None` when any
/// step lands on a missing key, a scalar, `null` or an empty array.
pub fn get<'a>(document: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.segments() {
        current = representative(current)?.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Assign `value` at `path`, returning whether the assignment happened.
///
/// Assigning over an existing key keeps that key's position. The empty path
/// replaces the whole document.
pub fn set(document: &mut Value, path: &KeyPath, value: Value) -> bool {
    let Some((last, parents)) = path.split_last() else {
        *document = value;
        return true;
    };

    let Some(target) = walk_mut(document, parents, true) else {
        tracing::trace!(%path, "set: parent path did not resolve, skipping");
        return false;
    };

    match target.as_object_mut() {
        Some(obj) => {
            obj.insert(last.clone(), value);
            true
        }
        None => {
            tracing::trace!(%path, "set: parent is not an object, skipping");
            false
        }
    }
}

/// Remove the field at `path`, returning the removed value.
///
/// Removing a missing key, or removing through an empty array, is a no-op.
/// The remaining keys keep their relative order. The empty path removes
/// nothing.
pub fn delete(document: &mut Value, path: &KeyPath) -> Option<Value> {
    let (last, parents) = path.split_last()?;
    let removed = walk_mut(document, parents, false)?
        .as_object_mut()?
        .shift_remove(last);
    if removed.is_none() {
        tracing::trace!(%path, "delete: key not present");
    }
    removed
}

/// Walk `segments` and return the array-resolved node that should hold the
/// final field.
fn walk_mut<'a>(
    document: &'a mut Value,
    segments: &[String],
    synthesize: bool,
) -> Option<&'a mut Value> {
    let mut current = document;
    for segment in segments {
        current = representative_mut(current, synthesize)?
            .as_object_mut()?
            .get_mut(segment)?;
    }
    representative_mut(current, synthesize)
}

/// Substitute the first element for as long as `node` is an array.
fn representative(node: &Value) -> Option<&Value> {
    let mut current = node;
    while let Value::Array(items) = current {
        current = items.first()?;
    }
    Some(current)
}

fn representative_mut(node: &mut Value, synthesize: bool) -> Option<&mut Value> {
    match node {
        Value::Array(items) => {
            if items.is_empty() && synthesize {
                items.push(Value::Object(Map::new()));
            }
            representative_mut(items.first_mut()?, synthesize)
        }
        other => Some(other),
    }
}
