//! Testing status — caller-owned bookkeeping of what has been tried.
//!
//! Records which keys are finished and, per key, which generated case
//! indices were marked as tested. The generator never reads this; it is
//! passed around explicitly by the CLI and the browser page.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::EdgeCaseError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestingStatus {
    pub completed_keys: BTreeSet<String>,
    pub tested_cases: BTreeMap<String, BTreeSet<usize>>,
}

/// Tested vs. total cases for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub tested: usize,
    pub total: usize,
}

impl TestingStatus {
    /// Parse a persisted status document.
    pub fn from_json(text: &str) -> Result<Self, EdgeCaseError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, EdgeCaseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Mark `key` as finished. Returns `false` if it already was.
    pub fn complete_key(&mut self, key: &str) -> bool {
        self.completed_keys.insert(key.to_string())
    }

    pub fn is_completed(&self, key: &str) -> bool {
        self.completed_keys.contains(key)
    }

    /// Flip the tested flag of case `index` under `key`; returns the new flag.
    pub fn toggle_tested(&mut self, key: &str, index: usize) -> bool {
        let tested = self.tested_cases.entry(key.to_string()).or_default();
        if tested.remove(&index) {
            false
        } else {
            tested.insert(index);
            true
        }
    }

    pub fn is_tested(&self, key: &str, index: usize) -> bool {
        self.tested_cases
            .get(key)
            .is_some_and(|tested| tested.contains(&index))
    }

    pub fn tested_indices(&self, key: &str) -> Vec<usize> {
        self.tested_cases
            .get(key)
            .map(|tested| tested.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Progress for `key` against a case set of `total` entries.
    ///
    /// Indices at or beyond `total` (left over from an older, longer case set)
    /// are not counted.
    pub fn progress(&self, key: &str, total: usize) -> Progress {
        let tested = self
            .tested_cases
            .get(key)
            .map_or(0, |tested| tested.range(..total).count());
        Progress { tested, total }
    }
}
