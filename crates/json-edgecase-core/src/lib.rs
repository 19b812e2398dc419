//! # json-edgecase-core
//!
//! Derive the key paths of a sample JSON document and generate type-driven
//! edge-case mutations of it.
//!
//! ## Targeted generation
//!
//! [`extract_keys`] lists the selectable keys. [`generate`] takes one key and
//! returns a [`CaseSet`]: one full copy of the document per boundary value
//! from [`plan_mutations`], followed by a copy with the key removed.
//!
//! ```
//! use json_edgecase_core::{extract_key_strings, generate, KeyPath};
//! use serde_json::json;
//!
//! let doc = json!({"name": "Ann", "age": 30});
//! assert_eq!(extract_key_strings(&doc), vec!["name", "age"]);
//!
//! let cases = generate(&doc, &KeyPath::parse("age").unwrap());
//! assert_eq!(cases.len(), 5);
//! assert_eq!(cases.deletion_case(), Some(&json!({"name": "Ann"})));
//! ```
//!
//! ## Secondary features
//!
//! - [`sweep`] mutates every key of a document with an injection-oriented
//!   table, capped by [`SweepOptions::max_cases`].
//! - [`export`] renders a case set as a JSON envelope, CSV or NDJSON.
//! - [`status`] and [`tracker`] hold caller-side bookkeeping as plain values.

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod key_path;
pub mod keys;
pub mod path;
pub mod planner;
pub mod status;
pub mod sweep;
pub mod tracker;

pub use config::{ExportFormat, SweepOptions, DEFAULT_SWEEP_MAX_CASES};
pub use error::{EdgeCaseError, ErrorCode};
pub use export::{export_file_name, ExportEnvelope};
pub use generator::{generate, structural_copy, CaseSet};
pub use key_path::KeyPath;
pub use keys::{extract_key_strings, extract_keys};
pub use planner::{plan_mutations, MAX_SAFE_INTEGER};
pub use status::{Progress, TestingStatus};
pub use sweep::{sweep, sweep_mutations, SweepCase};
pub use tracker::{CaseStatus, TestCase, TestCaseField, Tracker};

/// Version of the result envelopes emitted by the bindings.
pub const API_VERSION: &str = "1.0";

/// Parse document text into a value the generator accepts.
///
/// The generator itself never parses; this is the boundary check that
/// rejects malformed input before it reaches the core.
pub fn parse_document(text: &str) -> Result<serde_json::Value, EdgeCaseError> {
    Ok(serde_json::from_str(text)?)
}
