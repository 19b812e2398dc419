//! Manual test tracker — free-form pass/fail test case records.
//!
//! Independent of mutation generation. The tracker always holds at least
//! one case: a new tracker starts with an empty one, the last case cannot
//! be deleted, and clearing leaves a single fresh case behind.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EdgeCaseError;

/// Separator printed under each case heading in the plain-text form.
const RULE: &str = "─────────────────────────────────";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pass,
    Fail,
}

impl CaseStatus {
    fn label(self) -> &'static str {
        match self {
            CaseStatus::Pass => "PASS",
            CaseStatus::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub expected_behaviour: String,
    #[serde(default)]
    pub actual_behaviour: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_status"
    )]
    pub status: Option<CaseStatus>,
}

impl TestCase {
    fn empty(id: String) -> Self {
        Self {
            id,
            title: String::new(),
            scenario: String::new(),
            expected_behaviour: String::new(),
            actual_behaviour: String::new(),
            status: None,
        }
    }
}

/// Editable text fields of a [`TestCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCaseField {
    Title,
    Scenario,
    ExpectedBehaviour,
    ActualBehaviour,
}

impl FromStr for TestCaseField {
    type Err = EdgeCaseError;

    /// Accepts the camelCase names used in persisted records as well as
    /// kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(TestCaseField::Title),
            "scenario" => Ok(TestCaseField::Scenario),
            "expectedBehaviour" | "expected-behaviour" => Ok(TestCaseField::ExpectedBehaviour),
            "actualBehaviour" | "actual-behaviour" => Ok(TestCaseField::ActualBehaviour),
            other => Err(EdgeCaseError::UnknownField {
                field: other.to_string(),
            }),
        }
    }
}

/// Pass/fail counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSummary {
    pub total_cases: usize,
    pub passed_cases: usize,
    pub failed_cases: usize,
}

/// JSON export document for the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerExport {
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: TrackerSummary,
    pub test_cases: Vec<TestCase>,
}

/// Ordered list of manual test cases. Persists as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tracker {
    cases: Vec<TestCase>,
}

impl Tracker {
    /// A tracker holding one empty case.
    pub fn new(now: DateTime<Utc>) -> Self {
        let mut tracker = Self { cases: Vec::new() };
        tracker.add(now);
        tracker
    }

    /// Load persisted cases; an empty list gets one fresh case.
    pub fn from_json(text: &str, now: DateTime<Utc>) -> Result<Self, EdgeCaseError> {
        let cases: Vec<TestCase> = serde_json::from_str(text)?;
        if cases.is_empty() {
            return Ok(Self::new(now));
        }
        Ok(Self { cases })
    }

    pub fn to_json(&self) -> Result<String, EdgeCaseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn get(&self, id: &str) -> Option<&TestCase> {
        self.cases.iter().find(|case| case.id == id)
    }

    /// Append an empty case and return its id (`tc_<millis>_<n>`).
    pub fn add(&mut self, now: DateTime<Utc>) -> String {
        let id = self.next_id(now);
        self.cases.push(TestCase::empty(id.clone()));
        tracing::debug!(%id, "added manual test case");
        id
    }

    pub fn delete(&mut self, id: &str) -> Result<TestCase, EdgeCaseError> {
        if self.cases.len() == 1 {
            return Err(EdgeCaseError::LastTestCase);
        }
        let index = self.position(id)?;
        Ok(self.cases.remove(index))
    }

    pub fn update(
        &mut self,
        id: &str,
        field: TestCaseField,
        value: impl Into<String>,
    ) -> Result<(), EdgeCaseError> {
        let index = self.position(id)?;
        let case = &mut self.cases[index];
        let slot = match field {
            TestCaseField::Title => &mut case.title,
            TestCaseField::Scenario => &mut case.scenario,
            TestCaseField::ExpectedBehaviour => &mut case.expected_behaviour,
            TestCaseField::ActualBehaviour => &mut case.actual_behaviour,
        };
        *slot = value.into();
        Ok(())
    }

    /// Set the status; setting the status a case already has clears it.
    pub fn set_status(
        &mut self,
        id: &str,
        status: CaseStatus,
    ) -> Result<Option<CaseStatus>, EdgeCaseError> {
        let index = self.position(id)?;
        let case = &mut self.cases[index];
        case.status = if case.status == Some(status) {
            None
        } else {
            Some(status)
        };
        Ok(case.status)
    }

    /// Drop every case and start over with a single empty one.
    pub fn clear(&mut self, now: DateTime<Utc>) {
        self.cases.clear();
        self.add(now);
    }

    pub fn summary(&self) -> TrackerSummary {
        let count = |status: CaseStatus| {
            self.cases
                .iter()
                .filter(|case| case.status == Some(status))
                .count()
        };
        TrackerSummary {
            total_cases: self.cases.len(),
            passed_cases: count(CaseStatus::Pass),
            failed_cases: count(CaseStatus::Fail),
        }
    }

    pub fn export(&self, now: DateTime<Utc>) -> TrackerExport {
        TrackerExport {
            exported_at: now,
            summary: self.summary(),
            test_cases: self.cases.clone(),
        }
    }

    /// Clipboard text for all cases. Empty fields print as `N/A`.
    pub fn format_plain_text(&self) -> String {
        let blocks: Vec<String> = self
            .cases
            .iter()
            .enumerate()
            .map(|(index, case)| format_case(index, case))
            .collect();
        blocks.join("\n\n")
    }

    fn position(&self, id: &str) -> Result<usize, EdgeCaseError> {
        self.cases
            .iter()
            .position(|case| case.id == id)
            .ok_or_else(|| EdgeCaseError::UnknownTestCase { id: id.to_string() })
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        (0..)
            .map(|n: usize| format!("tc_{millis}_{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_else(|| format!("tc_{millis}"))
    }
}

fn format_case(index: usize, case: &TestCase) -> String {
    let or_na = |s: &str| if s.is_empty() { "N/A".to_string() } else { s.to_string() };
    let mut out = format!("TEST CASE #{}", index + 1);
    if let Some(status) = case.status {
        out.push_str(&format!(" [{}]", status.label()));
    }
    out.push_str(&format!(
        "\n{RULE}\nTitle: {}\n\nScenario:\n{}\n\nExpected Behaviour:\n{}\n\nActual Behaviour:\n{}\n",
        or_na(&case.title),
        or_na(&case.scenario),
        or_na(&case.expected_behaviour),
        or_na(&case.actual_behaviour),
    ));
    out
}

/// Records written before a status was chosen carry `"status": ""`.
fn deserialize_status<'de, D>(deserializer: D) -> Result<Option<CaseStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some("pass") => Ok(Some(CaseStatus::Pass)),
        Some("fail") => Ok(Some(CaseStatus::Fail)),
        Some(other) => Err(serde::de::Error::unknown_variant(other, &["pass", "fail"])),
    }
}
