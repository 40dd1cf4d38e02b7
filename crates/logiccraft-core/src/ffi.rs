//! FFI-friendly JSON entrypoint for language bindings.
//!
//! This module provides a single `run_json` function that accepts
//! a mode string and JSON arguments, returning a JSON result.
//! This is the primary interface for the WebAssembly binding.
//!
//! ## Response Envelope
//!
//! All responses use a consistent envelope format:
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Strict Parsing
//!
//! - Missing keys use sensible defaults
//! - Invalid values return errors (no silent fallback to defaults)

use serde_json::Value;

use crate::accuracy::run_builtin_accuracy;
use crate::error::{LogicCraftError, ResponseEnvelope};
use crate::{analyze_complexity, explain_complexity};

/// Language used when `language` is missing or null.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Run a LogicCraft operation with JSON arguments, returning JSON output.
///
/// # Arguments
///
/// * `mode` - The operation mode: "analyze", "explain", "accuracy", "version"
/// * `args_json` - JSON object with the arguments
///
/// # Example
///
/// ```
/// use logiccraft_core::ffi::run_json;
///
/// let out = run_json("analyze", r#"{"code": "for (;;) { x(); }"}"#);
/// assert!(out.starts_with(r#"{"ok":true"#));
/// assert!(out.contains(r#""time":"O(N)""#));
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => {
            tracing::debug!(mode, code = %err.code, "run_json failed");
            ResponseEnvelope::error(&err).to_json()
        }
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, LogicCraftError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !args.is_object() {
        return Err(LogicCraftError::invalid_field("arguments", "a JSON object"));
    }

    match mode {
        "analyze" => {
            let (code, language) = parse_analyze_args(&args)?;
            Ok(serde_json::to_value(analyze_complexity(&code, &language))?)
        }
        "explain" => {
            let (code, language) = parse_analyze_args(&args)?;
            Ok(serde_json::to_value(explain_complexity(&code, &language))?)
        }
        "accuracy" => Ok(serde_json::to_value(run_builtin_accuracy())?),
        "version" => Ok(serde_json::json!({
            "version": version(),
            "schema_version": schema_version(),
        })),
        _ => Err(LogicCraftError::unknown_mode(mode)),
    }
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

fn parse_analyze_args(args: &Value) -> Result<(String, String), LogicCraftError> {
    let code = parse_required_string(args, "code")?;
    let language = parse_string(args, "language", DEFAULT_LANGUAGE)?;
    Ok((code, language))
}

/// Parse a required string field: missing -> error, non-string -> error.
fn parse_required_string(args: &Value, field: &str) -> Result<String, LogicCraftError> {
    match args.get(field) {
        None | Some(Value::Null) => Err(LogicCraftError::missing_field(field)),
        Some(v) => v
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| LogicCraftError::invalid_field(field, "a string")),
    }
}

/// Parse a string field strictly: missing/null -> default, non-string -> error.
fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, LogicCraftError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| LogicCraftError::invalid_field(field, "a string")),
    }
}

/// Get the LogicCraft version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the schema version.
pub fn schema_version() -> u32 {
    logiccraft_types::SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(result: &str) -> Value {
        serde_json::from_str(result).unwrap()
    }

    #[test]
    fn run_json_version() {
        let parsed = parse(&run_json("version", "{}"));
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["data"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed["data"]["schema_version"], 1);
    }

    #[test]
    fn run_json_unknown_mode() {
        let parsed = parse(&run_json("scan", "{}"));
        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["error"]["code"], "unknown_mode");
        assert!(parsed["error"]["message"].as_str().unwrap().contains("scan"));
        assert!(parsed["error"]["details"].as_str().unwrap().contains("analyze"));
    }

    #[test]
    fn run_json_invalid_json() {
        let parsed = parse(&run_json("analyze", "not valid json"));
        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["error"]["code"], "invalid_json");
    }

    #[test]
    fn json_is_checked_before_mode() {
        let parsed = parse(&run_json("nope", "{"));
        assert_eq!(parsed["error"]["code"], "invalid_json");
    }

    #[test]
    fn arguments_must_be_an_object() {
        let parsed = parse(&run_json("version", "[]"));
        assert_eq!(parsed["error"]["code"], "invalid_settings");
    }

    #[test]
    fn analyze_defaults_to_javascript() {
        let parsed = parse(&run_json("analyze", r#"{"code": "def f():\n    for x in y:\n        pass"}"#));
        assert_eq!(parsed["ok"], true);
        // JS rules see a loop keyword but no brace.
        assert_eq!(parsed["data"]["time"], "O(1)");

        let parsed = parse(&run_json(
            "analyze",
            r#"{"code": "def f():\n    for x in y:\n        pass", "language": "python"}"#,
        ));
        assert_eq!(parsed["data"]["time"], "O(N)");
    }

    #[test]
    fn null_language_uses_default() {
        let a = run_json("analyze", r#"{"code": "x", "language": null}"#);
        let b = run_json("analyze", r#"{"code": "x"}"#);
        assert_eq!(a, b);
    }

    #[test]
    fn analyze_requires_code() {
        let parsed = parse(&run_json("analyze", "{}"));
        assert_eq!(parsed["error"]["code"], "invalid_settings");
        assert!(parsed["error"]["message"].as_str().unwrap().contains("code"));
    }

    #[test]
    fn strict_parsing_rejects_wrong_types() {
        let parsed = parse(&run_json("analyze", r#"{"code": 42}"#));
        assert_eq!(parsed["error"]["code"], "invalid_settings");

        let parsed = parse(&run_json("explain", r#"{"code": "x", "language": true}"#));
        assert_eq!(parsed["error"]["code"], "invalid_settings");
        assert!(parsed["error"]["message"].as_str().unwrap().contains("language"));
    }

    #[test]
    fn explain_includes_rule() {
        let parsed = parse(&run_json("explain", r#"{"code": "for (;;) { x(); }"}"#));
        assert_eq!(parsed["data"]["rule"], "single-loop");
        assert_eq!(parsed["data"]["family"], "js_like");
        assert_eq!(parsed["data"]["result"]["time"], "O(N)");
    }

    #[test]
    fn accuracy_ignores_arguments() {
        let parsed = parse(&run_json("accuracy", r#"{"anything": 1}"#));
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["data"]["total"], 16);
    }
}
