//! Whole-document sweep — mutate every key, one at a time.
//!
//! This is a secondary mode with its own candidate table, aimed at
//! injection-style payloads rather than the type/Unicode boundaries of
//! [`crate::planner::plan_mutations`]. The two tables are kept apart.
//!
//! Traversal visits object keys depth-first, pre-order, and recurses into
//! nested objects only: arrays are mutated as a whole but never descended.
//! Emission stops at [`SweepOptions::max_cases`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::SweepOptions;
use crate::generator::structural_copy;
use crate::key_path::KeyPath;
use crate::path;
use crate::planner::MAX_SAFE_INTEGER;

/// Injection payloads tried against every string field.
pub const INJECTION_PAYLOADS: &[(&str, &str)] = &[
    ("script injection", "<script>alert(1)</script>"),
    ("sql injection", "' OR '1'='1"),
    ("sql drop table", "'; DROP TABLE users; --"),
    ("path traversal", "../../../etc/passwd"),
    ("template injection", "${7*7}"),
];

/// One labelled replacement value.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepMutation {
    pub label: &'static str,
    pub value: Value,
}

impl SweepMutation {
    fn new(label: &'static str, value: Value) -> Self {
        Self { label, value }
    }
}

/// A document with one key replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepCase {
    pub key: KeyPath,
    /// Human-readable label of the mutation, e.g. `"age: negative"`.
    pub description: String,
    pub document: Value,
}

/// Sweep-mode candidates for a field currently holding `current`.
pub fn sweep_mutations(current: &Value) -> Vec<SweepMutation> {
    let mut mutations = vec![SweepMutation::new("null", Value::Null)];

    match current {
        Value::String(_) => {
            mutations.push(SweepMutation::new("empty string", json!("")));
            mutations.extend(
                INJECTION_PAYLOADS
                    .iter()
                    .map(|&(label, payload)| SweepMutation::new(label, json!(payload))),
            );
        }
        Value::Number(_) => mutations.extend([
            SweepMutation::new("zero", json!(0)),
            SweepMutation::new("negative", json!(-1)),
            SweepMutation::new("max safe integer", json!(MAX_SAFE_INTEGER)),
        ]),
        Value::Array(_) => mutations.push(SweepMutation::new("empty array", json!([]))),
        Value::Object(_) => mutations.push(SweepMutation::new("empty object", json!({}))),
        Value::Bool(_) | Value::Null => {}
    }

    mutations
}

/// Mutate every key of `document`, one case per (key, mutation).
///
/// A document whose root is not an object yields no cases.
pub fn sweep(document: &Value, options: &SweepOptions) -> Vec<SweepCase> {
    let mut cases = Vec::new();
    if let Value::Object(map) = document {
        sweep_object(document, map, &KeyPath::root(), options.max_cases, &mut cases);
    }
    tracing::debug!(
        count = cases.len(),
        max_cases = options.max_cases,
        "document sweep finished"
    );
    cases
}

/// Returns `false` once the cap is reached so callers stop recursing.
fn sweep_object(
    root: &Value,
    map: &Map<String, Value>,
    prefix: &KeyPath,
    max_cases: usize,
    out: &mut Vec<SweepCase>,
) -> bool {
    for (name, value) in map {
        let key = prefix.child(name);

        for mutation in sweep_mutations(value) {
            if out.len() >= max_cases {
                tracing::debug!(%key, "sweep case cap reached");
                return false;
            }
            let mut copy = structural_copy(root);
            path::set(&mut copy, &key, mutation.value);
            out.push(SweepCase {
                description: format!("{key}: {}", mutation.label),
                key: key.clone(),
                document: copy,
            });
        }

        if let Value::Object(child) = value {
            if !sweep_object(root, child, &key, max_cases, out) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts(max_cases: usize) -> SweepOptions {
        SweepOptions { max_cases }
    }

    #[test]
    fn string_table_has_injection_payloads_and_no_unicode() {
        let values: Vec<Value> = sweep_mutations(&json!("x"))
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values.len(), 7);
        assert!(values.contains(&json!("<script>alert(1)</script>")));
        assert!(values.contains(&json!("' OR '1'='1")));
        assert!(!values.contains(&json!("™©®€¥£")));
    }

    #[test]
    fn boolean_table_is_null_only() {
        let values: Vec<Value> = sweep_mutations(&json!(true))
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec![Value::Null]);
    }

    #[test]
    fn sweep_visits_nested_objects_pre_order() {
        let doc = json!({"user": {"active": true}, "count": 1});
        let cases = sweep(&doc, &SweepOptions::default());
        let keys: Vec<String> = cases.iter().map(|c| c.key.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "user",
                "user",
                "user.active",
                "count",
                "count",
                "count",
                "count"
            ]
        );
        assert_eq!(cases[2].document, json!({"user": {"active": null}, "count": 1}));
        assert_eq!(cases[2].description, "user.active: null");
    }

    #[test]
    fn sweep_does_not_descend_into_arrays() {
        let doc = json!({"items": [{"sku": "A"}]});
        let cases = sweep(&doc, &SweepOptions::default());
        assert_eq!(cases.len(), 2);
        assert!(cases.iter().all(|c| c.key.to_string() == "items"));
        assert_eq!(cases[1].document, json!({"items": []}));
    }

    #[test]
    fn sweep_respects_cap() {
        let mut map = Map::new();
        for i in 0..20 {
            map.insert(format!("field{i}"), json!("value"));
        }
        let doc = Value::Object(map);
        assert_eq!(sweep(&doc, &SweepOptions::default()).len(), 50);
        assert_eq!(sweep(&doc, &opts(3)).len(), 3);
        assert!(sweep(&doc, &opts(0)).is_empty());
    }

    #[test]
    fn sweep_on_non_object_root_is_empty() {
        assert!(sweep(&json!([{"a": 1}]), &SweepOptions::default()).is_empty());
        assert!(sweep(&json!("text"), &SweepOptions::default()).is_empty());
    }

    #[test]
    fn sweep_leaves_source_untouched() {
        let doc = json!({"a": {"b": "c"}});
        let before = doc.clone();
        let _ = sweep(&doc, &SweepOptions::default());
        assert_eq!(doc, before);
    }
}
