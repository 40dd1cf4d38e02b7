//! Property-based tests for logiccraft-content preprocessing.

use logiccraft_content::{
    line_count, mask_strings, strip_comments, strip_js_comments, strip_python_comments,
};
use logiccraft_types::AnalyzerFamily;
use proptest::prelude::*;

fn arb_family() -> impl Strategy<Value = AnalyzerFamily> {
    prop_oneof![Just(AnalyzerFamily::Python), Just(AnalyzerFamily::JsLike)]
}

proptest! {
    // ========================
    // Line structure
    // ========================

    #[test]
    fn stripping_preserves_line_count(src in "\\PC{0,200}", family in arb_family()) {
        let stripped = strip_comments(&src, family);
        prop_assert_eq!(line_count(&stripped), line_count(&src));
    }

    #[test]
    fn masking_preserves_line_count(src in "[a-z'\"`\\\\\n (){};]{0,200}") {
        prop_assert_eq!(line_count(&mask_strings(&src)), line_count(&src));
    }

    // ========================
    // Stripping never grows the input
    // ========================

    #[test]
    fn stripping_never_grows(src in "\\PC{0,200}") {
        prop_assert!(strip_python_comments(&src).len() <= src.len());
        prop_assert!(strip_js_comments(&src).len() <= src.len());
    }

    #[test]
    fn masking_never_grows(src in "\\PC{0,200}") {
        prop_assert!(mask_strings(&src).len() <= src.len());
    }

    // ========================
    // Markers are gone after stripping
    // ========================

    #[test]
    fn python_output_has_no_bare_hash(src in "[a-z #\n]{0,120}") {
        let stripped = strip_python_comments(&src);
        prop_assert!(!stripped.contains('#'));
    }

    #[test]
    fn js_output_has_no_line_comment(src in "[a-z /\n]{0,120}") {
        let stripped = strip_js_comments(&src);
        prop_assert!(!stripped.contains("//"));
    }

    // ========================
    // Determinism
    // ========================

    #[test]
    fn preprocessing_is_deterministic(src in "\\PC{0,200}", family in arb_family()) {
        prop_assert_eq!(strip_comments(&src, family), strip_comments(&src, family));
        prop_assert_eq!(mask_strings(&src), mask_strings(&src));
    }
}
