//! Property-based tests for key extraction and case generation.
//!
//! Properties under test:
//! 1. Determinism: `generate(d, k) == generate(d, k)`
//! 2. Cardinality: `len(generate(d, k)) == len(plan_mutations(get(d, k))) + 1`
//! 3. Leading null and deletion-last for every extracted key
//! 4. Isolation: the source document is never modified
//! 5. Round-trip: every case survives serialize → parse unchanged
//! 6. Extracted keys never contain array indices and always resolve

use json_edgecase_core::{
    extract_keys, generate, path, plan_mutations, sweep, CaseSet, KeyPath, SweepOptions,
};
use proptest::prelude::*;
use serde_json::{Map, Number, Value};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Field names never containing the `.` separator. Empty and
/// whitespace-only names are legal JSON keys and are generated too.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-zA-Z0-9_]{0,6}",
        "[ \t]{0,2}",
        "[a-z ]{1,4}",
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        // Quarter steps print with few digits and reparse exactly.
        (-400_000i32..400_000).prop_map(|n| {
            Number::from_f64(f64::from(n) / 4.0).map_or(Value::Null, Value::Number)
        }),
        "[[:print:]]{0,12}".prop_map(Value::String),
    ]
}

/// Arbitrary JSON documents of bounded depth and width.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::vec((arb_key(), inner), 0..5).prop_map(|entries| {
                let mut map = Map::new();
                for (k, v) in entries {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Object-rooted documents, the common input shape.
fn arb_document() -> impl Strategy<Value = Value> {
    proptest::collection::vec((arb_key(), arb_value()), 1..6).prop_map(|entries| {
        let mut map = Map::new();
        for (k, v) in entries {
            map.insert(k, v);
        }
        Value::Object(map)
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, ..Default::default() })]

    #[test]
    fn generate_is_deterministic(doc in arb_document()) {
        for key in extract_keys(&doc) {
            prop_assert_eq!(generate(&doc, &key), generate(&doc, &key));
        }
    }

    #[test]
    fn cardinality_matches_plan(doc in arb_document()) {
        for key in extract_keys(&doc) {
            let planned = plan_mutations(path::get(&doc, &key));
            prop_assert_eq!(generate(&doc, &key).len(), planned.len() + 1);
        }
    }

    #[test]
    fn leading_null_and_trailing_deletion(doc in arb_document()) {
        for key in extract_keys(&doc) {
            let set = generate(&doc, &key);
            prop_assert_eq!(path::get(&set.cases[0], &key), Some(&Value::Null));
            prop_assert_eq!(path::get(set.deletion_case().unwrap(), &key), None);
        }
    }

    #[test]
    fn source_document_is_never_modified(doc in arb_document()) {
        let before = doc.clone();
        for key in extract_keys(&doc) {
            let _ = generate(&doc, &key);
        }
        let _ = sweep(&doc, &SweepOptions::default());
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn cases_round_trip_through_text(doc in arb_document()) {
        for key in extract_keys(&doc) {
            for case in generate(&doc, &key) {
                let text = serde_json::to_string(&case).unwrap();
                let reparsed: Value = serde_json::from_str(&text).unwrap();
                prop_assert_eq!(reparsed, case);
            }
        }
    }

    #[test]
    fn case_sets_round_trip_through_serde(doc in arb_document()) {
        for key in extract_keys(&doc) {
            // Non-empty keys render unambiguously and parse back.
            if !key.to_string().is_empty() {
                prop_assert_eq!(KeyPath::parse(&key.to_string()).unwrap(), key.clone());
            }
            let set = generate(&doc, &key);
            if set.key.to_string().is_empty() {
                continue;
            }
            let text = serde_json::to_string(&set).unwrap();
            let back: CaseSet = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(back, set);
        }
    }

    #[test]
    fn extracted_keys_resolve(doc in arb_value()) {
        for key in extract_keys(&doc) {
            prop_assert!(path::get(&doc, &key).is_some(), "unresolved key {}", key);
        }
    }

    #[test]
    fn sweep_never_exceeds_cap(doc in arb_document(), cap in 0usize..60) {
        let cases = sweep(&doc, &SweepOptions { max_cases: cap });
        prop_assert!(cases.len() <= cap);
    }
}
