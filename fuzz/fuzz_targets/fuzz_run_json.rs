//! Fuzz target for the `run_json` FFI entrypoint.
//!
//! The first line of the input is the mode, the rest is the argument JSON.
//! Every call must return a well-formed envelope.

#![no_main]
use libfuzzer_sys::fuzz_target;
use logiccraft_core::ffi::run_json;
use serde_json::Value;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (mode, args) = input.split_once('\n').unwrap_or((input, "{}"));

    let out = run_json(mode, args);
    let envelope: Value = serde_json::from_str(&out).expect("run_json must emit JSON");
    let ok = envelope["ok"].as_bool().expect("envelope has boolean ok");
    if ok {
        assert!(envelope.get("data").is_some());
        assert!(envelope.get("error").is_none());
    } else {
        assert!(envelope["error"]["code"].is_string());
        assert!(envelope["error"]["message"].is_string());
    }
});
