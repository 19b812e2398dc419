//! Edge-case generation for a single selected key.
//!
//! For a document and a key path, [`generate`] produces one structural copy
//! per planned candidate (with the candidate written at the path) followed by
//! one copy with the path removed. The source document is never touched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::key_path::KeyPath;
use crate::path;
use crate::planner::plan_mutations;

/// The ordered cases generated for one key.
///
/// Always ends with exactly one deletion case, so `len() >= 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSet {
    /// Key the cases were generated for.
    pub key: KeyPath,
    /// Full mutated documents, in generation order.
    pub cases: Vec<Value>,
}

impl CaseSet {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.cases.iter()
    }

    /// The trailing case with the key removed.
    pub fn deletion_case(&self) -> Option<&Value> {
        self.cases.last()
    }

    pub fn into_cases(self) -> Vec<Value> {
        self.cases
    }
}

impl IntoIterator for CaseSet {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

impl<'a> IntoIterator for &'a CaseSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

/// Independent deep copy of `document`.
///
/// This is the only allocation-heavy step of generation; its cost is linear
/// in the size of the document and it runs once per emitted case.
pub fn structural_copy(document: &Value) -> Value {
    document.clone()
}

/// Generate the case set for `key` in `document`.
///
/// A key that no longer resolves is planned as `null`, so a stale selection
/// still yields a valid (two-element) case set.
///
/// # Example
///
/// ```
/// use json_edgecase_core::{generate, KeyPath};
/// use serde_json::json;
///
/// let doc = json!({"flag": true});
/// let set = generate(&doc, &KeyPath::parse("flag").unwrap());
/// assert_eq!(
///     set.cases,
///     vec![
///         json!({"flag": null}),
///         json!({"flag": "true"}),
///         json!({"flag": 0}),
///         json!({"flag": ""}),
///         json!({}),
///     ]
/// );
/// ```
pub fn generate(document: &Value, key: &KeyPath) -> CaseSet {
    let current = path::get(document, key);
    if current.is_none() {
        tracing::debug!(%key, "key does not resolve, planning as null");
    }

    let candidates = plan_mutations(current);
    let mut cases = Vec::with_capacity(candidates.len() + 1);

    for candidate in candidates {
        let mut copy = structural_copy(document);
        path::set(&mut copy, key, candidate);
        cases.push(copy);
    }

    let mut deleted = structural_copy(document);
    path::delete(&mut deleted, key);
    cases.push(deleted);

    tracing::debug!(%key, count = cases.len(), "generated edge cases");
    CaseSet {
        key: key.clone(),
        cases,
    }
}
