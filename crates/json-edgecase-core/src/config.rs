//! Configuration for document sweeps and case-set export.

use serde::{Deserialize, Serialize};

/// Default cap on the number of cases a sweep emits.
pub const DEFAULT_SWEEP_MAX_CASES: usize = 50;

/// Options for the whole-document sweep.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `max-cases`). This naming
/// convention is part of the public API contract for bindings and state files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SweepOptions {
    /// Total number of cases emitted across all keys. Default: 50.
    pub max_cases: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            max_cases: DEFAULT_SWEEP_MAX_CASES,
        }
    }
}

/// Output format for an exported case set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// `{ key, generatedAt, totalCases, testCases }` document.
    Envelope,
    /// `Test Case #,Key Modified,JSON Payload` rows.
    Csv,
    /// One compact JSON document per line.
    Ndjson,
}

impl ExportFormat {
    /// File extension used when naming exported files.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Envelope => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_options_serde_round_trip() {
        let opts = SweepOptions { max_cases: 12 };

        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"max-cases\""));

        let deserialized: SweepOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, opts);
    }

    #[test]
    fn test_sweep_options_missing_fields_use_default() {
        let opts: SweepOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.max_cases, DEFAULT_SWEEP_MAX_CASES);
    }

    #[test]
    fn test_export_format_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ExportFormat::Ndjson).unwrap(),
            "\"ndjson\""
        );
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Envelope.extension(), "json");
    }
}
