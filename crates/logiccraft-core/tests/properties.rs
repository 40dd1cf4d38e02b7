//! Property-based tests for `logiccraft-core`.
//!
//! Uses `proptest` to verify invariants that must hold for all inputs.

use proptest::prelude::*;

use logiccraft_core::{analyze_complexity, explain_complexity};

fn arb_language() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("javascript".to_string()),
        Just("typescript".to_string()),
        Just("python".to_string()),
        Just("Python".to_string()),
        "[a-z]{0,8}",
    ]
}

proptest! {
    #[test]
    fn analysis_is_total_and_bounded(code in any::<String>(), lang in arb_language()) {
        let r = analyze_complexity(&code, &lang);
        prop_assert!(r.cyclomatic >= 1);
        prop_assert!(r.maintainability <= 100);
        prop_assert!(!r.time.is_empty());
        prop_assert!(!r.space.is_empty());
    }

    #[test]
    fn analysis_is_deterministic(code in ".{0,300}", lang in arb_language()) {
        prop_assert_eq!(analyze_complexity(&code, &lang), analyze_complexity(&code, &lang));
    }

    #[test]
    fn language_tag_case_does_not_matter(code in ".{0,200}", lang in "[a-zA-Z]{1,10}") {
        prop_assert_eq!(
            analyze_complexity(&code, &lang.to_lowercase()),
            analyze_complexity(&code, &lang.to_uppercase())
        );
    }

    #[test]
    fn explain_agrees_with_analyze(code in ".{0,300}", lang in arb_language()) {
        prop_assert_eq!(explain_complexity(&code, &lang).result, analyze_complexity(&code, &lang));
    }

    #[test]
    fn commenting_out_whole_input_gives_constant(
        lines in prop::collection::vec("[a-z(){};= ]{0,30}", 0..20),
    ) {
        let js: String = lines.iter().map(|l| format!("// {l}\n")).collect();
        let py: String = lines.iter().map(|l| format!("# {l}\n")).collect();
        for (code, lang) in [(js, "javascript"), (py, "python")] {
            let r = analyze_complexity(&code, lang);
            prop_assert_eq!(r.time, "O(1)");
            prop_assert_eq!(r.space, "O(1)");
            prop_assert_eq!(r.cyclomatic, 1);
        }
    }
}
