//! FFI round-trip tests for `run_json`.
//!
//! Focus on envelope consistency across modes and on agreement between
//! the JSON surface and the Rust API.

use logiccraft_core::analyze_complexity;
use logiccraft_core::ffi::run_json;
use logiccraft_core::types::{AccuracyReport, ComplexityExplanation, ComplexityResult};

fn parse_ok(result: &str) -> serde_json::Value {
    let v: serde_json::Value = serde_json::from_str(result).expect("valid JSON");
    assert_eq!(v["ok"], true, "expected ok=true: {result}");
    assert!(v.get("error").is_none());
    v
}

fn parse_err(result: &str) -> serde_json::Value {
    let v: serde_json::Value = serde_json::from_str(result).expect("valid JSON");
    assert_eq!(v["ok"], false, "expected ok=false: {result}");
    assert!(v.get("data").is_none());
    v
}

#[test]
fn analyze_data_deserializes_to_result() {
    let code = "function fact(n){ if(n<=1) return 1; return n*fact(n-1); }";
    let args = serde_json::json!({"code": code, "language": "javascript"}).to_string();
    let v = parse_ok(&run_json("analyze", &args));
    let result: ComplexityResult = serde_json::from_value(v["data"].clone()).unwrap();
    assert_eq!(result, analyze_complexity(code, "javascript"));
}

#[test]
fn analyze_data_has_exactly_four_fields() {
    let v = parse_ok(&run_json("analyze", r#"{"code": ""}"#));
    let keys: Vec<&String> = v["data"].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    for key in ["time", "space", "maintainability", "cyclomatic"] {
        assert!(v["data"].get(key).is_some(), "missing {key}");
    }
}

#[test]
fn explain_data_deserializes() {
    let args = serde_json::json!({"code": "def f(n):\n    return f(n - 1)", "language": "python"});
    let v = parse_ok(&run_json("explain", &args.to_string()));
    let e: ComplexityExplanation = serde_json::from_value(v["data"].clone()).unwrap();
    assert_eq!(e.rule, "recursion");
    assert_eq!(e.language, "python");
    assert_eq!(e.signals.space_reason.as_deref(), Some("call stack"));
}

#[test]
fn accuracy_data_deserializes() {
    let v = parse_ok(&run_json("accuracy", "{}"));
    let report: AccuracyReport = serde_json::from_value(v["data"].clone()).unwrap();
    assert_eq!(report.tool.name, "logiccraft");
    assert_eq!(report.cases.len(), report.total);
}

#[test]
fn error_envelopes_share_shape() {
    let cases = [
        ("analyze", "{", "invalid_json"),
        ("analyze", "{}", "invalid_settings"),
        ("analyze", r#"{"code": []}"#, "invalid_settings"),
        ("bogus", "{}", "unknown_mode"),
    ];
    for (mode, args, code) in cases {
        let v = parse_err(&run_json(mode, args));
        assert_eq!(v["error"]["code"], code, "{mode} {args}");
        assert!(v["error"]["message"].is_string());
    }
}

#[test]
fn calls_are_stateless() {
    let first = run_json("analyze", r#"{"code": "for (;;) { }"}"#);
    let _ = run_json("bogus", "{}");
    let _ = run_json("accuracy", "{}");
    let again = run_json("analyze", r#"{"code": "for (;;) { }"}"#);
    assert_eq!(first, again);
}

#[test]
fn unicode_code_survives_the_round_trip() {
    let args = serde_json::json!({"code": "// ünïcödé ✓\nfor (const c of \"日本\") { n++; }"});
    let v = parse_ok(&run_json("analyze", &args.to_string()));
    assert_eq!(v["data"]["time"], "O(N)");
}
