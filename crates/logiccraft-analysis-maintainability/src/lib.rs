//! Maintainability and cyclomatic scoring helpers.
//!
//! Both metrics are keyword counts over preprocessed text, not a control
//! flow graph. Callers pass text that has already had comments stripped
//! (and, for the JS family, strings masked).

use std::sync::LazyLock;

use logiccraft_types::{AnalyzerFamily, MAINTAINABILITY_MAX};
use regex::Regex;

static JS_DECISION_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:if|while|for|case)\b|&&|\|\|").expect("valid regex literal")
});

static PYTHON_DECISION_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:if|elif|for|while|except|with|and|or)\b").expect("valid regex literal")
});

/// Penalty weights for the maintainability score.
///
/// Score = `100 - cyclomatic * cyclomatic_weight - lines * line_weight`,
/// rounded and clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaintainabilityWeights {
    pub cyclomatic_weight: f64,
    pub line_weight: f64,
}

impl MaintainabilityWeights {
    pub const JS_LIKE: Self = Self {
        cyclomatic_weight: 2.0,
        line_weight: 0.5,
    };

    pub const PYTHON: Self = Self {
        cyclomatic_weight: 3.0,
        line_weight: 0.5,
    };

    pub fn for_family(family: AnalyzerFamily) -> Self {
        match family {
            AnalyzerFamily::Python => Self::PYTHON,
            AnalyzerFamily::JsLike => Self::JS_LIKE,
        }
    }
}

/// Compute the maintainability score.
///
/// ```
/// use logiccraft_analysis_maintainability::{compute_maintainability, MaintainabilityWeights};
///
/// // 100 - 3*2 - 5/2 = 91.5, rounded half up
/// assert_eq!(compute_maintainability(3, 5, MaintainabilityWeights::JS_LIKE), 92);
/// assert_eq!(compute_maintainability(80, 10, MaintainabilityWeights::JS_LIKE), 0);
/// ```
pub fn compute_maintainability(
    cyclomatic: u32,
    line_count: usize,
    weights: MaintainabilityWeights,
) -> u32 {
    let raw = MAINTAINABILITY_MAX as f64
        - cyclomatic as f64 * weights.cyclomatic_weight
        - line_count as f64 * weights.line_weight;
    raw.clamp(0.0, MAINTAINABILITY_MAX as f64).round() as u32
}

/// Count branching keywords and short-circuit operators.
///
/// JS family: `if`, `while`, `for`, `case`, `&&`, `||`.
/// Python: `if`, `elif`, `for`, `while`, `except`, `with`, `and`, `or`.
pub fn count_decision_points(text: &str, family: AnalyzerFamily) -> u32 {
    let pattern = match family {
        AnalyzerFamily::Python => &*PYTHON_DECISION_POINT,
        AnalyzerFamily::JsLike => &*JS_DECISION_POINT,
    };
    let count = pattern.find_iter(text).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Cyclomatic complexity: decision points + 1.
pub fn cyclomatic_complexity(text: &str, family: AnalyzerFamily) -> u32 {
    count_decision_points(text, family).saturating_add(1)
}

/// Letter grade for a maintainability score.
pub fn grade_for_score(score: u32) -> &'static str {
    if score >= 85 {
        "A"
    } else if score >= 65 {
        "B"
    } else {
        "C"
    }
}
