//! Python heuristics.
//!
//! Scope is read from indentation. Only the first `def` in the input is
//! checked for recursion, and loop depth only resets at a top-level
//! statement that is not a `def`, so sibling loops inside one function
//! stack up.

use std::sync::LazyLock;

use logiccraft_analysis_maintainability::{
    MaintainabilityWeights, compute_maintainability, cyclomatic_complexity,
};
use logiccraft_content::{is_blank_or_comment, leading_indent, line_count};
use logiccraft_types::{AnalyzerFamily, BigO, ComplexityResult, SignalSnapshot};
use regex::Regex;

use crate::Analysis;
use crate::rules::{DecisionList, Rule, constant_fallback};

static DEF_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*def\s+([A-Za-z_]\w*)\s*\(").expect("valid regex literal")
});

static CALL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_]\w*)\s*\(").expect("valid regex literal"));

static MIDPOINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//\s*2\b|>>\s*1\b|\bdivmod\s*\([^)]*\b2\b[^)]*\)").expect("valid regex literal")
});

static WHILE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bwhile\b").expect("valid regex literal"));

static SPACE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("list()", r"\blist\s*\("),
        ("list literal", r"=\s*\["),
        ("comprehension", r"\[[^\]\n]*\bfor\b[^\]\n]*\bin\b[^\]\n]*\]"),
    ]
    .into_iter()
    .map(|(reason, pattern)| (reason, Regex::new(pattern).expect("valid regex literal")))
    .collect()
});

/// Detector outputs for one Python source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PySignals {
    pub is_recursive: bool,
    pub has_midpoint: bool,
    pub has_while: bool,
    pub max_loop_nesting: u32,
    pub allocation: Option<&'static str>,
}

impl PySignals {
    pub fn detect(stripped: &str) -> Self {
        Self {
            is_recursive: first_def_is_recursive(stripped),
            has_midpoint: MIDPOINT.is_match(stripped),
            has_while: WHILE_KEYWORD.is_match(stripped),
            max_loop_nesting: max_loop_nesting(stripped),
            allocation: SPACE_PATTERNS
                .iter()
                .find(|(_, pattern)| pattern.is_match(stripped))
                .map(|(reason, _)| *reason),
        }
    }

    pub fn space(&self) -> BigO {
        if self.allocation.is_some() || self.is_recursive {
            BigO::Linear
        } else {
            BigO::Constant
        }
    }

    fn snapshot(&self, space: BigO) -> SignalSnapshot {
        let reason = self
            .allocation
            .or_else(|| self.is_recursive.then_some(crate::js::CALL_STACK));
        SignalSnapshot {
            is_recursive: self.is_recursive,
            has_midpoint: self.has_midpoint,
            has_while: self.has_while,
            max_loop_nesting: self.max_loop_nesting,
            divide_and_conquer: None,
            branching_factor: None,
            space_reason: (space == BigO::Linear)
                .then_some(reason)
                .flatten()
                .map(str::to_string),
        }
    }
}

fn is_binary_search(s: &PySignals) -> bool {
    s.has_midpoint && s.has_while
}

fn is_triple_loop(s: &PySignals) -> bool {
    s.max_loop_nesting == 3
}

fn is_double_loop(s: &PySignals) -> bool {
    s.max_loop_nesting == 2
}

fn is_single_loop(s: &PySignals) -> bool {
    s.max_loop_nesting == 1
}

fn is_recursive(s: &PySignals) -> bool {
    s.is_recursive
}

/// Time classification for Python, first match wins.
///
/// Unlike the JS table, binary search keeps whatever space the allocation
/// scan found.
pub static PY_RULES: DecisionList<PySignals> = DecisionList {
    rules: &[
        Rule::new("binary-search", is_binary_search, BigO::Logarithmic),
        Rule::new("triple-nested-loop", is_triple_loop, BigO::Cubic),
        Rule::new("double-nested-loop", is_double_loop, BigO::Quadratic),
        Rule::new("single-loop", is_single_loop, BigO::Linear),
        Rule::new("recursion", is_recursive, BigO::Linear),
    ],
    fallback: constant_fallback(),
};

/// Analyze comment-stripped Python source.
pub fn analyze_python(stripped: &str) -> Analysis {
    let signals = PySignals::detect(stripped);
    let rule = PY_RULES.classify(&signals);
    let space = rule.space.apply(signals.space());

    let cyclomatic = cyclomatic_complexity(stripped, AnalyzerFamily::Python);
    let maintainability = compute_maintainability(
        cyclomatic,
        line_count(stripped),
        MaintainabilityWeights::PYTHON,
    );

    Analysis {
        result: ComplexityResult::from_classes(rule.time, space, maintainability, cyclomatic),
        family: AnalyzerFamily::Python,
        rule: rule.name,
        signals: signals.snapshot(space),
    }
}

/// Whether the first `def` calls itself inside its own body.
///
/// The body is every following line indented deeper than the header, up
/// to the first top-level line. Blank and comment lines are skipped.
pub fn first_def_is_recursive(stripped: &str) -> bool {
    let lines: Vec<&str> = stripped.split('\n').collect();
    let Some((idx, name)) = lines.iter().enumerate().find_map(|(idx, line)| {
        DEF_HEADER
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| (idx, m.as_str()))
    }) else {
        return false;
    };

    let def_indent = leading_indent(lines[idx]);
    lines[idx + 1..]
        .iter()
        .filter(|line| !is_blank_or_comment(line, AnalyzerFamily::Python))
        .take_while(|line| leading_indent(line) != 0)
        .filter(|line| leading_indent(line) > def_indent)
        .any(|line| {
            CALL_TOKEN
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .any(|ident| ident.as_str() == name)
        })
}

/// Count of `for`/`while` statements seen since the last top-level
/// non-`def` statement, maximized over the file.
pub fn max_loop_nesting(stripped: &str) -> u32 {
    let mut depth: u32 = 0;
    let mut max_depth: u32 = 0;
    for line in stripped.split('\n') {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            continue;
        }
        if leading_indent(line) == 0 && !trimmed.starts_with("def ") {
            depth = 0;
        }
        if trimmed.starts_with("for ") || trimmed.starts_with("while ") {
            depth = depth.saturating_add(1);
            max_depth = max_depth.max(depth);
        }
    }
    max_depth
}
