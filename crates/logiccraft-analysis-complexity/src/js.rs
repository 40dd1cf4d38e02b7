//! JavaScript/TypeScript heuristics.
//!
//! Also the fallback analyzer for every non-Python language tag, so Java,
//! C++, Go and friends are read with JavaScript-shaped patterns.
//!
//! Structure is detected on a string-masked copy of the comment-stripped
//! source. Loop nesting is brace counting per line: a header on one line
//! and its `{` on the next is not seen as a loop, and any `}` (including
//! the end of an `if` block) closes a level.

use std::sync::LazyLock;

use logiccraft_analysis_maintainability::{
    MaintainabilityWeights, compute_maintainability, cyclomatic_complexity,
};
use logiccraft_content::{line_count, mask_strings};
use logiccraft_types::{AnalyzerFamily, BigO, ComplexityResult, SignalSnapshot};
use regex::Regex;

use crate::Analysis;
use crate::rules::{DecisionList, Rule, SpaceEffect, constant_fallback};

static FUNCTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunction(?:\s*\*\s*|\s+)([A-Za-z_$][\w$]*)\s*\(").expect("valid regex literal")
});

static CALL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_$][\w$]*)\s*\(").expect("valid regex literal"));

static LOOP_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:for|while)\b").expect("valid regex literal"));

static WHILE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bwhile\b").expect("valid regex literal"));

static MIDPOINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)Math\.floor\s*\([^\n]*?/\s*2\b|>>>?\s*1\b|\bmid\s*=(?:[^=]|$)")
        .expect("valid regex literal")
});

static SLICE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.slice\s*\(").expect("valid regex literal"));

/// Allocation patterns that upgrade space to `O(N)`, checked in order.
static SPACE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("new Map", r"\bnew\s+Map\s*\("),
        ("new Set", r"\bnew\s+Set\s*\("),
        ("array spread", r"\[\s*\.\.\."),
        ("slice", r"\.slice\s*\("),
        ("map", r"\.map\s*\("),
        ("new Array", r"\bnew\s+Array\s*\("),
        ("empty array", r"=\s*\[\s*\]"),
    ]
    .into_iter()
    .map(|(reason, pattern)| (reason, Regex::new(pattern).expect("valid regex literal")))
    .collect()
});

/// Words that precede `(` without being calls.
const NON_CALL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "function", "typeof", "do", "else",
    "with", "yield", "await", "void", "delete", "in", "of", "new",
];

pub(crate) const CALL_STACK: &str = "call stack";

/// Detector outputs for one JS-family source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsSignals {
    pub is_recursive: bool,
    pub has_midpoint: bool,
    pub has_while: bool,
    pub has_slice: bool,
    pub max_loop_nesting: u32,
    /// Max call-like tokens on one line; 1 for non-recursive code.
    pub branching_factor: u32,
    /// First allocation pattern found, if any.
    pub allocation: Option<&'static str>,
}

impl JsSignals {
    /// Collect every signal from comment-stripped source.
    pub fn detect(stripped: &str) -> Self {
        Self::from_masked(&mask_strings(stripped))
    }

    fn from_masked(masked: &str) -> Self {
        let is_recursive = !recursive_functions(masked).is_empty();
        Self {
            is_recursive,
            has_midpoint: MIDPOINT.is_match(masked),
            has_while: WHILE_KEYWORD.is_match(masked),
            has_slice: SLICE_CALL.is_match(masked),
            max_loop_nesting: max_loop_nesting(masked),
            branching_factor: if is_recursive {
                branching_factor(masked)
            } else {
                1
            },
            allocation: allocation_pattern(masked),
        }
    }

    pub fn divide_and_conquer(&self) -> bool {
        self.is_recursive && (self.has_midpoint || self.has_slice)
    }

    /// Space before any rule-specific override.
    pub fn space(&self) -> BigO {
        if self.allocation.is_some() || self.is_recursive {
            BigO::Linear
        } else {
            BigO::Constant
        }
    }

    pub fn space_reason(&self) -> Option<&'static str> {
        self.allocation
            .or_else(|| self.is_recursive.then_some(CALL_STACK))
    }

    fn snapshot(&self, space: BigO) -> SignalSnapshot {
        SignalSnapshot {
            is_recursive: self.is_recursive,
            has_midpoint: self.has_midpoint,
            has_while: self.has_while,
            max_loop_nesting: self.max_loop_nesting,
            divide_and_conquer: Some(self.divide_and_conquer()),
            branching_factor: self.is_recursive.then_some(self.branching_factor),
            space_reason: (space == BigO::Linear)
                .then(|| self.space_reason())
                .flatten()
                .map(str::to_string),
        }
    }
}

fn is_binary_search(s: &JsSignals) -> bool {
    !s.is_recursive && s.has_midpoint && s.has_while
}

fn is_divide_and_conquer(s: &JsSignals) -> bool {
    s.divide_and_conquer() && s.branching_factor >= 2
}

fn is_linear_recursion(s: &JsSignals) -> bool {
    s.is_recursive && s.branching_factor <= 2 && s.max_loop_nesting == 0
}

fn is_branching_recursion(s: &JsSignals) -> bool {
    s.is_recursive && s.branching_factor >= 3
}

fn is_triple_loop(s: &JsSignals) -> bool {
    s.max_loop_nesting == 3
}

fn is_double_loop(s: &JsSignals) -> bool {
    s.max_loop_nesting == 2
}

fn is_single_loop(s: &JsSignals) -> bool {
    s.max_loop_nesting == 1
}

fn is_recursive(s: &JsSignals) -> bool {
    s.is_recursive
}

/// Time classification for the JS family, first match wins.
pub static JS_RULES: DecisionList<JsSignals> = DecisionList {
    rules: &[
        Rule::new("binary-search", is_binary_search, BigO::Logarithmic)
            .with_space(SpaceEffect::Override(BigO::Constant)),
        Rule::new("divide-and-conquer", is_divide_and_conquer, BigO::Linearithmic),
        Rule::new("linear-recursion", is_linear_recursion, BigO::Linear),
        Rule::new("branching-recursion", is_branching_recursion, BigO::Exponential),
        Rule::new("triple-nested-loop", is_triple_loop, BigO::Cubic),
        Rule::new("double-nested-loop", is_double_loop, BigO::Quadratic),
        Rule::new("single-loop", is_single_loop, BigO::Linear),
        Rule::new("recursion", is_recursive, BigO::Linear),
    ],
    fallback: constant_fallback(),
};

/// Analyze comment-stripped JS-family source.
pub fn analyze_js(stripped: &str) -> Analysis {
    let masked = mask_strings(stripped);
    let signals = JsSignals::from_masked(&masked);
    let rule = JS_RULES.classify(&signals);
    let space = rule.space.apply(signals.space());

    let cyclomatic = cyclomatic_complexity(&masked, AnalyzerFamily::JsLike);
    let maintainability = compute_maintainability(
        cyclomatic,
        line_count(stripped),
        MaintainabilityWeights::JS_LIKE,
    );

    Analysis {
        result: ComplexityResult::from_classes(rule.time, space, maintainability, cyclomatic),
        family: AnalyzerFamily::JsLike,
        rule: rule.name,
        signals: signals.snapshot(space),
    }
}

/// Names of declared functions that are referenced as calls more than once
/// (the declaration itself is one reference).
pub fn recursive_functions(masked: &str) -> Vec<String> {
    let calls: Vec<&str> = CALL_TOKEN
        .captures_iter(masked)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let mut names: Vec<String> = Vec::new();
    for caps in FUNCTION_DECL.captures_iter(masked) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if names.iter().any(|n| n == name) {
            continue;
        }
        if calls.iter().filter(|&&call| call == name).count() > 1 {
            names.push(name.to_string());
        }
    }
    names
}

/// Deepest brace-delimited loop nesting seen line by line.
pub fn max_loop_nesting(masked: &str) -> u32 {
    let mut depth: u32 = 0;
    let mut max_depth: u32 = 0;
    for line in masked.lines() {
        if LOOP_KEYWORD.is_match(line) && line.contains('{') {
            depth = depth.saturating_add(1);
            max_depth = max_depth.max(depth);
        }
        let closing = u32::try_from(line.matches('}').count()).unwrap_or(u32::MAX);
        depth = depth.saturating_sub(closing);
    }
    max_depth
}

/// Max number of call-like tokens on a single line, at least 1.
///
/// Declaration heads (`function name(`) and control keywords are not
/// counted as calls.
pub fn branching_factor(masked: &str) -> u32 {
    masked
        .lines()
        .map(|line| {
            let without_decls = FUNCTION_DECL.replace_all(line, "");
            CALL_TOKEN
                .captures_iter(&without_decls)
                .filter_map(|caps| caps.get(1))
                .filter(|ident| !NON_CALL_KEYWORDS.contains(&ident.as_str()))
                .count()
        })
        .max()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
        .max(1)
}

/// First allocation pattern present in the source.
pub fn allocation_pattern(masked: &str) -> Option<&'static str> {
    SPACE_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(masked))
        .map(|(reason, _)| *reason)
}
