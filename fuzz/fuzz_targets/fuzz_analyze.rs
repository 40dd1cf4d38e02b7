//! Fuzz target for `analyze_complexity`.
//!
//! Validates:
//! - No panics for either analyzer family
//! - Time/space labels are drawn from the known classes
//! - Maintainability stays in 0..=100 and cyclomatic is at least 1
//! - Identical input gives identical output

#![no_main]
use libfuzzer_sys::fuzz_target;
use logiccraft_core::analyze_complexity;
use logiccraft_types::BigO;

/// Regex scans are linear, but keep iterations fast.
const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let code = String::from_utf8_lossy(data);

    for language in ["javascript", "python"] {
        let result = analyze_complexity(&code, language);
        assert!(result.time_class().is_some(), "unknown time label {}", result.time);
        assert!(
            matches!(result.space_class(), Some(BigO::Constant | BigO::Linear)),
            "unexpected space label {}",
            result.space
        );
        assert!(result.maintainability <= 100);
        assert!(result.cyclomatic >= 1);
        assert_eq!(result, analyze_complexity(&code, language));
    }
});
