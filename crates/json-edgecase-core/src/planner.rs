//! Mutation planning — type-driven boundary values for a single field.
//!
//! [`plan_mutations`] is the targeted-mode candidate table: empty values,
//! type confusion, whitespace/control characters, Unicode handling and
//! numeric limits. The deletion case is not part of the plan; the generator
//! appends it separately.

use serde_json::{json, Value};

/// Largest integer an IEEE-754 double represents without precision loss.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// String with embedded newline and tab control characters.
pub const CONTROL_CHARS: &str = "Test\nNew\tLine";

/// String of non-ASCII symbol characters.
pub const SYMBOLS: &str = "™©®€¥£";

/// String mixing Arabic and Chinese scripts with an emoji.
pub const MIXED_SCRIPTS: &str = "مرحبا 你好 🎉";

/// Type-mismatch placeholder used for array fields.
pub const NOT_AN_ARRAY: &str = "not-an-array";

/// Candidate replacement values for a field whose current value is
/// `current` (`None` when the path did not resolve).
///
/// The first candidate is always `null`.
pub fn plan_mutations(current: Option<&Value>) -> Vec<Value> {
    let mut candidates = vec![Value::Null];

    match current {
        Some(Value::String(_)) => candidates.extend([
            json!(""),
            json!(CONTROL_CHARS),
            json!(SYMBOLS),
            json!(MIXED_SCRIPTS),
        ]),
        Some(Value::Number(_)) => candidates.extend([json!(0), json!(-1), json!(MAX_SAFE_INTEGER)]),
        Some(Value::Bool(_)) => candidates.extend([json!("true"), json!(0), json!("")]),
        Some(Value::Array(_)) => candidates.extend([
            json!([]),
            json!([null]),
            json!([""]),
            json!(NOT_AN_ARRAY),
        ]),
        Some(Value::Object(_)) => candidates.push(json!({})),
        Some(Value::Null) | None => {}
    }

    candidates
}
