//! Case-set export — render generated cases for download.
//!
//! Pure formatting: callers decide where the text goes (file, stdout,
//! browser download). Timestamps are passed in so output stays
//! reproducible under test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ExportFormat;
use crate::error::EdgeCaseError;
use crate::generator::CaseSet;
use crate::key_path::KeyPath;

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Test Case #,Key Modified,JSON Payload";

/// JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub key: KeyPath,
    pub generated_at: DateTime<Utc>,
    pub total_cases: usize,
    pub test_cases: Vec<Value>,
}

impl ExportEnvelope {
    pub fn new(set: &CaseSet, generated_at: DateTime<Utc>) -> Self {
        Self {
            key: set.key.clone(),
            generated_at,
            total_cases: set.len(),
            test_cases: set.cases.clone(),
        }
    }
}

/// Render `set` in `format`.
///
/// The envelope is pretty-printed; CSV and NDJSON end with a newline.
pub fn export(
    set: &CaseSet,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<String, EdgeCaseError> {
    match format {
        ExportFormat::Envelope => Ok(serde_json::to_string_pretty(&ExportEnvelope::new(
            set,
            generated_at,
        ))?),
        ExportFormat::Csv => to_csv(set),
        ExportFormat::Ndjson => to_ndjson(set),
    }
}

/// One row per case: 1-based index, key, compact JSON payload.
pub fn to_csv(set: &CaseSet) -> Result<String, EdgeCaseError> {
    let key = csv_quote(&set.key.to_string());
    let mut out = String::with_capacity(CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for (index, case) in set.iter().enumerate() {
        let payload = serde_json::to_string(case)?;
        out.push_str(&format!("{},{},{}\n", index + 1, key, csv_quote(&payload)));
    }
    Ok(out)
}

/// Line-delimited JSON: one compact document per line.
pub fn to_ndjson(set: &CaseSet) -> Result<String, EdgeCaseError> {
    let mut out = String::new();
    for case in set {
        out.push_str(&serde_json::to_string(case)?);
        out.push('\n');
    }
    Ok(out)
}

/// Download name, e.g. `edge-cases-user-email-1767225600000.csv`.
pub fn export_file_name(key: &KeyPath, format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "edge-cases-{}-{}.{}",
        key.to_string().replace('.', "-"),
        at.timestamp_millis(),
        format.extension()
    )
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
