//! # logiccraft-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures and contracts for the LogicCraft
//! complexity analyzer. It contains only data types, Serde definitions,
//! label canonicalization and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON shape of
//! [`ComplexityResult`] (`time`, `space`, `maintainability`, `cyclomatic`),
//! which the playground UI consumes directly. Receipt types may grow new
//! fields in minor versions; removed or renamed fields bump `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (results, explanations, accuracy reports)
//! * Language tags and analyzer family routing
//! * Big-O label vocabulary and normalization
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Pattern matching / heuristics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod label;

pub use label::normalize_label;

/// The current schema version for JSON receipts.
pub const SCHEMA_VERSION: u32 = 1;

/// Upper bound of the maintainability score.
pub const MAINTAINABILITY_MAX: u32 = 100;

// -----------------------------------------------------------------------------
// Big-O vocabulary
// -----------------------------------------------------------------------------

/// Closed vocabulary of complexity classes the heuristics can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BigO {
    /// `O(1)`
    Constant,
    /// `O(log N)`
    Logarithmic,
    /// `O(N)`
    Linear,
    /// `O(N log N)`
    Linearithmic,
    /// `O(N²)`
    Quadratic,
    /// `O(N³)`
    Cubic,
    /// `O(2^N)`
    Exponential,
    /// `O(N!)`
    Factorial,
}

impl BigO {
    pub const ALL: [BigO; 8] = [
        BigO::Constant,
        BigO::Logarithmic,
        BigO::Linear,
        BigO::Linearithmic,
        BigO::Quadratic,
        BigO::Cubic,
        BigO::Exponential,
        BigO::Factorial,
    ];

    /// Canonical label, already normalized.
    pub fn label(self) -> &'static str {
        match self {
            BigO::Constant => "O(1)",
            BigO::Logarithmic => "O(log N)",
            BigO::Linear => "O(N)",
            BigO::Linearithmic => "O(N log N)",
            BigO::Quadratic => "O(N²)",
            BigO::Cubic => "O(N³)",
            BigO::Exponential => "O(2^N)",
            BigO::Factorial => "O(N!)",
        }
    }
}

impl fmt::Display for BigO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label is not part of the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a known complexity class: {}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for BigO {
    type Err = UnknownLabel;

    /// Accepts any spelling that normalizes to a canonical label,
    /// e.g. `"O(n^2)"` or `"O(n logn)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s.trim());
        BigO::ALL
            .into_iter()
            .find(|class| class.label() == normalized)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

// -----------------------------------------------------------------------------
// Result
// -----------------------------------------------------------------------------

/// Complexity verdict for one piece of source text.
///
/// Always fully populated. `time` and `space` are strings rather than
/// [`BigO`] so that composite labels (e.g. `O(R*C)`) round-trip through the
/// same shape as the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexityResult {
    pub time: String,
    pub space: String,
    /// Heuristic readability score in `0..=100`.
    pub maintainability: u32,
    /// Decision points + 1, never below 1.
    pub cyclomatic: u32,
}

impl ComplexityResult {
    /// Build a result, normalizing labels and enforcing the numeric bounds.
    pub fn new(time: &str, space: &str, maintainability: u32, cyclomatic: u32) -> Self {
        Self {
            time: normalize_label(time),
            space: normalize_label(space),
            maintainability: maintainability.min(MAINTAINABILITY_MAX),
            cyclomatic: cyclomatic.max(1),
        }
    }

    pub fn from_classes(time: BigO, space: BigO, maintainability: u32, cyclomatic: u32) -> Self {
        Self::new(time.label(), space.label(), maintainability, cyclomatic)
    }

    /// The conservative verdict used when nothing structural is detected.
    pub fn baseline() -> Self {
        Self::from_classes(BigO::Constant, BigO::Constant, MAINTAINABILITY_MAX, 1)
    }

    /// Time class, if the label belongs to the closed vocabulary.
    pub fn time_class(&self) -> Option<BigO> {
        self.time.parse().ok()
    }

    /// Space class, if the label belongs to the closed vocabulary.
    pub fn space_class(&self) -> Option<BigO> {
        self.space.parse().ok()
    }
}

impl Default for ComplexityResult {
    fn default() -> Self {
        Self::baseline()
    }
}

// -----------------------------------------------------------------------------
// Languages
// -----------------------------------------------------------------------------

/// Which heuristic analyzer a language is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerFamily {
    /// Indentation-scoped Python heuristics.
    Python,
    /// Brace-scoped JavaScript/TypeScript heuristics; also the fallback for
    /// every other language tag.
    JsLike,
}

impl fmt::Display for AnalyzerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerFamily::Python => f.write_str("python"),
            AnalyzerFamily::JsLike => f.write_str("js_like"),
        }
    }
}

/// A language tag as supplied by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    /// Any other tag, lowercased. Routed through the JS-family heuristics.
    Other(String),
}

impl Language {
    /// Parse an editor tag. Case-insensitive and surrounding whitespace is ignored.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "python" => Language::Python,
            "javascript" => Language::JavaScript,
            "typescript" => Language::TypeScript,
            other => Language::Other(other.to_string()),
        }
    }

    /// Infer a language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let lang = match ext.to_lowercase().as_str() {
            "py" | "pyw" => Language::Python,
            "js" | "mjs" | "cjs" | "jsx" => Language::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Language::TypeScript,
            "java" => Language::Other("java".to_string()),
            "c" | "cc" | "cpp" | "cxx" | "h" | "hpp" => Language::Other("cpp".to_string()),
            "go" => Language::Other("go".to_string()),
            "rs" => Language::Other("rust".to_string()),
            "cs" => Language::Other("csharp".to_string()),
            "php" => Language::Other("php".to_string()),
            _ => return None,
        };
        Some(lang)
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Other(tag) => tag,
        }
    }

    pub fn family(&self) -> AnalyzerFamily {
        match self {
            Language::Python => AnalyzerFamily::Python,
            _ => AnalyzerFamily::JsLike,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// -----------------------------------------------------------------------------
// Explanation receipts
// -----------------------------------------------------------------------------

/// Snapshot of the signal detectors that fed the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SignalSnapshot {
    pub is_recursive: bool,
    pub has_midpoint: bool,
    pub has_while: bool,
    pub max_loop_nesting: u32,
    /// JS-family only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divide_and_conquer: Option<bool>,
    /// JS-family only; present when the code is recursive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branching_factor: Option<u32>,
    /// Why space was upgraded to `O(N)`, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_reason: Option<String>,
}

/// A [`ComplexityResult`] plus the reasoning that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityExplanation {
    pub schema_version: u32,
    pub language: String,
    pub family: AnalyzerFamily,
    /// Name of the decision-list entry that fired.
    pub rule: String,
    pub signals: SignalSnapshot,
    pub result: ComplexityResult,
}

// -----------------------------------------------------------------------------
// Accuracy receipts
// -----------------------------------------------------------------------------

/// Outcome of one accuracy case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub name: String,
    pub language: String,
    pub expected_time: String,
    pub expected_space: String,
    pub actual_time: String,
    pub actual_space: String,
    pub passed: bool,
}

/// Summary of an accuracy run over a fixture corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub total: usize,
    pub passed: usize,
    pub cases: Vec<CaseOutcome>,
}

impl AccuracyReport {
    /// Cases that did not pass. Saturates for inconsistent reports read
    /// back from JSON.
    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.passed)
    }

    /// Pass rate in percent, 0 for an empty corpus.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = self.passed as f64 * 100.0 / self.total as f64;
        (rate * 100.0).round() / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "logiccraft".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// Enums shared with CLI
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Plain text, one field per line.
    #[default]
    Text,
    /// Markdown table (good for pasting into a PR or chat).
    Md,
    /// JSON (pretty-printed).
    Json,
}
