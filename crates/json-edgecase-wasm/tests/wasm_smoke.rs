//! In-crate smoke tests for the WASM boundary layer.
//!
//! These run under `wasm32-unknown-unknown` via `wasm-pack test --node`
//! and validate the WASM API contract at the JsValue level.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_node_experimental);

use json_edgecase_wasm::{export_cases, extract_keys, generate, sweep};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_to_json(val: &JsValue) -> serde_json::Value {
    serde_wasm_bindgen::from_value(val.clone()).expect("JsValue → serde_json::Value")
}

fn json_to_js(val: &serde_json::Value) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    val.serialize(&serializer).unwrap()
}

fn document_js() -> JsValue {
    json_to_js(&serde_json::json!({
        "name": "Ann",
        "age": 30,
        "tags": [{ "label": "x" }]
    }))
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn test_extract_keys_returns_envelope() {
    let json = js_to_json(&extract_keys(document_js()).unwrap());

    assert_eq!(json["apiVersion"], "1.0");
    assert_eq!(
        json["keys"],
        serde_json::json!(["name", "age", "tags", "tags.label"])
    );
}

#[wasm_bindgen_test]
fn test_generate_returns_cases() {
    let json = js_to_json(&generate(document_js(), "age").unwrap());

    assert_eq!(json["apiVersion"], "1.0");
    assert_eq!(json["key"], "age");
    let cases = json["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 5);
    assert!(cases[0]["age"].is_null());
    assert!(cases[4].get("age").is_none(), "last case deletes the key");
}

#[wasm_bindgen_test]
fn test_generate_through_array() {
    let json = js_to_json(&generate(document_js(), "tags.label").unwrap());
    let cases = json["cases"].as_array().unwrap();

    assert_eq!(cases[1]["tags"][0]["label"], "");
}

#[wasm_bindgen_test]
fn test_generate_whitespace_field_name() {
    let doc = json_to_js(&serde_json::json!({ " ": "x", "a": 1 }));
    let keys = js_to_json(&extract_keys(doc.clone()).unwrap());
    assert_eq!(keys["keys"][0], " ");

    let json = js_to_json(&generate(doc, " ").unwrap());
    assert_eq!(json["key"], " ");
    assert_eq!(json["cases"].as_array().unwrap().len(), 6);
}

#[wasm_bindgen_test]
fn test_sweep_with_default_options() {
    let json = js_to_json(&sweep(document_js(), JsValue::UNDEFINED).unwrap());

    assert_eq!(json["apiVersion"], "1.0");
    let cases = json["cases"].as_array().unwrap();
    assert!(!cases.is_empty());
    assert!(cases[0]["description"].as_str().unwrap().starts_with("name: "));
}

#[wasm_bindgen_test]
fn test_sweep_camel_and_kebab_options() {
    for opts in [
        serde_json::json!({ "maxCases": 3 }),
        serde_json::json!({ "max-cases": 3 }),
    ] {
        let json = js_to_json(&sweep(document_js(), json_to_js(&opts)).unwrap());
        assert_eq!(json["cases"].as_array().unwrap().len(), 3, "opts={opts}");
    }
}

#[wasm_bindgen_test]
fn test_export_cases_csv() {
    let format = json_to_js(&serde_json::json!("csv"));
    let json = js_to_json(&export_cases(document_js(), "age", format, 1_767_225_600_000.0).unwrap());

    assert_eq!(json["fileName"], "edge-cases-age-1767225600000.csv");
    assert_eq!(json["mimeType"], "text/csv");
    assert!(json["content"]
        .as_str()
        .unwrap()
        .starts_with("Test Case #,Key Modified,JSON Payload"));
}

// ---------------------------------------------------------------------------
// Error path
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn test_empty_key_returns_no_selection() {
    let err = generate(document_js(), "").unwrap_err();
    let json = js_to_json(&err);

    assert_eq!(json["code"], "no_selection");
    assert_eq!(
        json["message"],
        "Please select a key before generating edge cases"
    );
}

#[wasm_bindgen_test]
fn test_invalid_options_returns_structured_error() {
    let opts = json_to_js(&serde_json::json!({ "maxCases": "lots" }));
    let err = sweep(document_js(), opts).unwrap_err();
    let json = js_to_json(&err);

    assert_eq!(json["code"], "json_parse_error");
    assert!(json["message"].is_string());
}
