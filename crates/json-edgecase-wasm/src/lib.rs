//! WASM bindings for json-edgecase.
//!
//! Exposes key extraction, targeted generation, the document sweep and
//! case-set export via `wasm-bindgen` for the browser page. Uses
//! `serde-wasm-bindgen` for JS ↔ serde_json::Value marshalling.
//!
//! ## WASM API Contract
//!
//! - Results are wrapped in an `apiVersion: "1.0"` envelope.
//! - Errors are structured JS objects `{ code, message, path }`.
//! - The sweep `options` parameter defaults to `SweepOptions::default()` when omitted.
//! - Options accept **camelCase** (`maxCases`) with kebab-case fallback (`max-cases`).
//! - The page parses the textarea itself; documents arrive as JS values.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::Serializer;

use json_edgecase_core::{
    export, EdgeCaseError, ExportFormat, KeyPath, SweepCase, SweepOptions, API_VERSION,
};

// ---------------------------------------------------------------------------
// WASM-local DTOs (Anti-Corruption Layer)
// ---------------------------------------------------------------------------

/// WASM envelope for `extractKeys` results.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmKeysResult {
    api_version: &'static str,
    keys: Vec<String>,
}

/// WASM envelope for `generate` results.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmGenerateResult<'a> {
    api_version: &'static str,
    key: &'a KeyPath,
    cases: &'a [serde_json::Value],
}

/// WASM envelope for `sweep` results.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmSweepResult<'a> {
    api_version: &'static str,
    cases: &'a [SweepCase],
}

/// WASM envelope for `exportCases` results.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmExportResult {
    api_version: &'static str,
    file_name: String,
    mime_type: &'static str,
    content: String,
}

/// WASM-local sweep options accepting camelCase from JS callers.
///
/// NOTE: Keep in sync with `json_edgecase_core::SweepOptions`.
/// Defaults are sourced from `SweepOptions::default()`.
#[derive(Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
struct WasmSweepOptions {
    #[serde(alias = "max-cases")]
    max_cases: Option<usize>,
}

impl From<WasmSweepOptions> for SweepOptions {
    fn from(wasm: WasmSweepOptions) -> Self {
        let mut opts = SweepOptions::default();
        if let Some(max_cases) = wasm.max_cases {
            opts.max_cases = max_cases;
        }
        opts
    }
}

// ---------------------------------------------------------------------------
// Error helpers
// ---------------------------------------------------------------------------

/// Map an `EdgeCaseError` to a structured JS object `{ code, message, path }`.
fn to_structured_js_error(e: &EdgeCaseError) -> JsValue {
    let serializer = Serializer::json_compatible();
    e.to_json().serialize(&serializer).unwrap_or_else(|_| {
        let fallback = serde_json::json!({
            "code": "serialization_error",
            "message": e.to_string(),
            "path": serde_json::Value::Null,
        });
        fallback
            .serialize(&serializer)
            .unwrap_or_else(|_| JsValue::from_str(&e.to_string()))
    })
}

/// Map a `serde_wasm_bindgen` error to `{ code: "json_parse_error", ... }`.
fn to_serde_js_error(e: serde_wasm_bindgen::Error) -> JsValue {
    let error_obj = serde_json::json!({
        "code": "json_parse_error",
        "message": e.to_string(),
        "path": serde_json::Value::Null,
    });
    let serializer = Serializer::json_compatible();
    error_obj
        .serialize(&serializer)
        .unwrap_or_else(|_| JsValue::from_str(&e.to_string()))
}

fn document_from_js(document: JsValue) -> Result<serde_json::Value, JsValue> {
    serde_wasm_bindgen::from_value(document).map_err(to_serde_js_error)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = Serializer::json_compatible();
    value.serialize(&serializer).map_err(to_serde_js_error)
}

// ---------------------------------------------------------------------------
// Public WASM API
// ---------------------------------------------------------------------------

/// Initialize WASM module — sets up panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// List the selectable key paths of a document.
///
/// Returns `{ apiVersion: "1.0", keys: string[] }`.
#[wasm_bindgen(js_name = extractKeys, skip_typescript)]
pub fn extract_keys(document: JsValue) -> Result<JsValue, JsValue> {
    let document = document_from_js(document)?;
    to_js(&WasmKeysResult {
        api_version: API_VERSION,
        keys: json_edgecase_core::extract_key_strings(&document),
    })
}

/// Generate the edge cases for one selected key.
///
/// Returns `{ apiVersion: "1.0", key, cases }`. An empty key throws
/// `{ code: "no_selection", ... }`.
#[wasm_bindgen(skip_typescript)]
pub fn generate(document: JsValue, key: &str) -> Result<JsValue, JsValue> {
    let document = document_from_js(document)?;
    let key = KeyPath::parse(key).map_err(|e| to_structured_js_error(&e))?;
    let set = json_edgecase_core::generate(&document, &key);

    to_js(&WasmGenerateResult {
        api_version: API_VERSION,
        key: &set.key,
        cases: &set.cases,
    })
}

/// Mutate every key of a document with the sweep table.
///
/// Returns `{ apiVersion: "1.0", cases: { key, description, document }[] }`.
#[wasm_bindgen(skip_typescript)]
pub fn sweep(document: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let document = document_from_js(document)?;

    let options: SweepOptions = if options.is_undefined() || options.is_null() {
        SweepOptions::default()
    } else {
        let wasm_opts: WasmSweepOptions =
            serde_wasm_bindgen::from_value(options).map_err(to_serde_js_error)?;
        wasm_opts.into()
    };

    let cases = json_edgecase_core::sweep(&document, &options);
    to_js(&WasmSweepResult {
        api_version: API_VERSION,
        cases: &cases,
    })
}

/// Generate and render the cases for one key as a downloadable file.
///
/// `format` is `"envelope"`, `"csv"` or `"ndjson"`; `generatedAtMillis` is
/// the page's `Date.now()`. Returns `{ apiVersion, fileName, mimeType, content }`.
#[wasm_bindgen(js_name = exportCases, skip_typescript)]
pub fn export_cases(
    document: JsValue,
    key: &str,
    format: JsValue,
    generated_at_millis: f64,
) -> Result<JsValue, JsValue> {
    let document = document_from_js(document)?;
    let key = KeyPath::parse(key).map_err(|e| to_structured_js_error(&e))?;
    let format: ExportFormat = serde_wasm_bindgen::from_value(format).map_err(to_serde_js_error)?;
    let generated_at: DateTime<Utc> =
        DateTime::from_timestamp_millis(generated_at_millis as i64).unwrap_or_default();

    let set = json_edgecase_core::generate(&document, &key);
    let content =
        export::export(&set, format, generated_at).map_err(|e| to_structured_js_error(&e))?;

    to_js(&WasmExportResult {
        api_version: API_VERSION,
        file_name: json_edgecase_core::export_file_name(&key, format, generated_at),
        mime_type: match format {
            ExportFormat::Envelope => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Ndjson => "application/x-ndjson",
        },
        content,
    })
}

// ⚠️ SYNC WARNING: These TypeScript types are hand-authored to match the
// serialized JS shapes produced by serde + Serializer::json_compatible().
// If you modify any of these Rust types, you MUST update the definitions
// below:
//
//   - WasmSweepOptions (this file)    → SweepOptions
//   - WasmKeysResult (this file)      → KeysResult
//   - WasmGenerateResult (this file)  → GenerateResult
//   - WasmSweepResult (this file)     → SweepResult
//   - WasmExportResult (this file)    → ExportResult
//   - ExportFormat (config.rs)        → ExportFormat
//   - ErrorCode (error.rs)            → ErrorCode
//   - EdgeCaseError.to_json (error.rs) → StructuredError
#[wasm_bindgen(typescript_custom_section)]
const TS_TYPES: &str = r#"
export type JsonValue =
  | null
  | boolean
  | number
  | string
  | JsonValue[]
  | { [key: string]: JsonValue };

export type ExportFormat = "envelope" | "csv" | "ndjson";

export interface SweepOptions {
  maxCases?: number;
}

export interface KeysResult {
  apiVersion: string;
  keys: string[];
}

export interface GenerateResult {
  apiVersion: string;
  key: string;
  cases: JsonValue[];
}

export interface SweepCase {
  key: string;
  description: string;
  document: JsonValue;
}

export interface SweepResult {
  apiVersion: string;
  cases: SweepCase[];
}

export interface ExportResult {
  apiVersion: string;
  fileName: string;
  mimeType: string;
  content: string;
}

export type ErrorCode =
  | "json_parse_error"
  | "no_selection"
  | "unknown_test_case"
  | "last_test_case"
  | "unknown_field";

export interface StructuredError {
  code: ErrorCode;
  message: string;
  path: string | null;
}

export function extractKeys(document: JsonValue): KeysResult;

export function generate(document: JsonValue, key: string): GenerateResult;

export function sweep(document: JsonValue, options?: SweepOptions | null): SweepResult;

export function exportCases(
  document: JsonValue,
  key: string,
  format: ExportFormat,
  generatedAtMillis: number
): ExportResult;
"#;
