#![no_main]

use json_edgecase_core::{extract_keys, generate, path, sweep, SweepOptions};
use libfuzzer_sys::fuzz_target;

// Accepts arbitrary bytes, attempts to parse as JSON, then generates the
// cases for every extracted key and runs a capped sweep.
// Goal: no panics, and the null-first / deletion-last shape always holds.
fuzz_target!(|data: &[u8]| {
    let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    for key in extract_keys(&document) {
        let set = generate(&document, &key);
        assert!(set.len() >= 2);
        assert_eq!(path::get(&set.cases[0], &key), Some(&serde_json::Value::Null));
        if let Some(deleted) = set.deletion_case() {
            assert!(path::get(deleted, &key).is_none());
        }
    }

    let _ = sweep(&document, &SweepOptions { max_cases: 16 });
});
