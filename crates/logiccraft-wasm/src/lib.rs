//! # logiccraft-wasm
//!
//! `wasm-bindgen` exports for the browser playground.
//!
//! Structured results cross the boundary as JSON text and are turned into
//! plain JS objects with `JSON.parse`, so the JS side never sees Rust
//! wrapper types. [`run_json`] returns the envelope string untouched.
//!
//! The core façade recovers from analyzer panics with `catch_unwind`,
//! which does nothing under wasm's `panic = "abort"`. An analyzer panic
//! here traps the module rather than returning the baseline verdict.

use logiccraft_core::ffi;
use wasm_bindgen::prelude::*;

/// Crate version, e.g. `"0.3.0"`.
#[wasm_bindgen]
pub fn version() -> String {
    ffi::version().to_string()
}

#[wasm_bindgen(js_name = schemaVersion)]
pub fn schema_version() -> u32 {
    ffi::schema_version()
}

/// Analyze `code` and return `{ time, space, maintainability, cyclomatic }`.
///
/// `language` defaults to `"javascript"` when omitted.
#[wasm_bindgen(js_name = analyzeComplexity)]
pub fn analyze_complexity(code: &str, language: Option<String>) -> Result<JsValue, JsValue> {
    let language = language.as_deref().unwrap_or(ffi::DEFAULT_LANGUAGE);
    let result = logiccraft_core::analyze_complexity(code, language);
    let json = serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Like [`analyze_complexity`], with the fired rule and detector signals.
#[wasm_bindgen(js_name = explainComplexity)]
pub fn explain_complexity(code: &str, language: Option<String>) -> Result<JsValue, JsValue> {
    let language = language.as_deref().unwrap_or(ffi::DEFAULT_LANGUAGE);
    let explanation = logiccraft_core::explain_complexity(code, language);
    let json =
        serde_json::to_string(&explanation).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Forward to [`logiccraft_core::ffi::run_json`] and return the envelope.
#[wasm_bindgen(js_name = runJson)]
pub fn run_json(mode: &str, args_json: &str) -> String {
    ffi::run_json(mode, args_json)
}
