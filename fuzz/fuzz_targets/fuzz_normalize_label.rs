//! Fuzz target for Big-O label canonicalization.

#![no_main]
use libfuzzer_sys::fuzz_target;
use logiccraft_types::normalize_label;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let once = normalize_label(s);
        assert_eq!(normalize_label(&once), once, "normalize_label must be idempotent");
    }
});
