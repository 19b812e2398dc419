//! Error types for edge-case generation and its companion features.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes for binding consumers.
///
/// These codes form a **stable API contract**: variant names and their
/// serialized `snake_case` strings must never change across versions.
/// The WASM binding maps them onto structured JS error objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// Input text is not valid JSON (or a value could not be serialized).
    JsonParseError,
    /// No key was selected before requesting generation.
    NoSelection,
    /// A tracker operation referenced an unknown test case id.
    UnknownTestCase,
    /// The last remaining tracker case cannot be deleted.
    LastTestCase,
    /// A tracker field name is not one of the editable fields.
    UnknownField,
}

#[derive(Debug, Error)]
pub enum EdgeCaseError {
    #[error("Invalid JSON document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Please select a key before generating edge cases")]
    NoSelection,

    #[error("Test case not found: {id}")]
    UnknownTestCase { id: String },

    #[error("Cannot delete the last test case")]
    LastTestCase,

    #[error("Unknown test case field: {field}")]
    UnknownField { field: String },
}

impl EdgeCaseError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EdgeCaseError::InvalidDocument(_) => ErrorCode::JsonParseError,
            EdgeCaseError::NoSelection => ErrorCode::NoSelection,
            EdgeCaseError::UnknownTestCase { .. } => ErrorCode::UnknownTestCase,
            EdgeCaseError::LastTestCase => ErrorCode::LastTestCase,
            EdgeCaseError::UnknownField { .. } => ErrorCode::UnknownField,
        }
    }

    /// Returns the key path or record id the error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            EdgeCaseError::UnknownTestCase { id } => Some(id),
            EdgeCaseError::UnknownField { field } => Some(field),
            EdgeCaseError::InvalidDocument(_)
            | EdgeCaseError::NoSelection
            | EdgeCaseError::LastTestCase => None,
        }
    }

    /// Produces a structured JSON error for binding consumers.
    ///
    /// Format: `{"code": "...", "message": "...", "path": "..." | null}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "path": self.path(),
        })
    }
}
