//! Fuzz target for comment stripping and string masking.
//!
//! Both passes must keep every newline of the input.

#![no_main]
use libfuzzer_sys::fuzz_target;
use logiccraft_content::{mask_strings, strip_comments};
use logiccraft_types::AnalyzerFamily;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let newlines = text.matches('\n').count();

    for family in [AnalyzerFamily::JsLike, AnalyzerFamily::Python] {
        let stripped = strip_comments(text, family);
        assert_eq!(stripped.matches('\n').count(), newlines);
        assert!(stripped.len() <= text.len());
    }

    let masked = mask_strings(text);
    assert_eq!(masked.matches('\n').count(), newlines);
});
