//! Property-based tests for `logiccraft-analysis-maintainability`.

use logiccraft_analysis_maintainability::{
    MaintainabilityWeights, compute_maintainability, cyclomatic_complexity,
};
use logiccraft_types::AnalyzerFamily;
use proptest::prelude::*;

fn arb_weights() -> impl Strategy<Value = MaintainabilityWeights> {
    prop_oneof![
        Just(MaintainabilityWeights::JS_LIKE),
        Just(MaintainabilityWeights::PYTHON),
    ]
}

fn arb_family() -> impl Strategy<Value = AnalyzerFamily> {
    prop_oneof![Just(AnalyzerFamily::Python), Just(AnalyzerFamily::JsLike)]
}

proptest! {
    #[test]
    fn prop_score_in_bounds(cc in any::<u32>(), lines in 0usize..1_000_000, w in arb_weights()) {
        let score = compute_maintainability(cc, lines, w);
        prop_assert!(score <= 100);
    }

    #[test]
    fn prop_score_monotone_in_cyclomatic(cc in 1u32..500, lines in 0usize..500, w in arb_weights()) {
        let a = compute_maintainability(cc, lines, w);
        let b = compute_maintainability(cc + 1, lines, w);
        prop_assert!(b <= a);
    }

    #[test]
    fn prop_score_monotone_in_lines(cc in 1u32..500, lines in 0usize..500, w in arb_weights()) {
        let a = compute_maintainability(cc, lines, w);
        let b = compute_maintainability(cc, lines + 1, w);
        prop_assert!(b <= a);
    }

    #[test]
    fn prop_cyclomatic_at_least_one(text in "\\PC{0,200}", family in arb_family()) {
        prop_assert!(cyclomatic_complexity(&text, family) >= 1);
    }

    #[test]
    fn prop_cyclomatic_grows_with_appended_branch(text in "[a-z ;\n]{0,100}") {
        let base = cyclomatic_complexity(&text, AnalyzerFamily::JsLike);
        let more = cyclomatic_complexity(&format!("{text}\nif (x) {{}}"), AnalyzerFamily::JsLike);
        prop_assert_eq!(more, base + 1);
    }
}
