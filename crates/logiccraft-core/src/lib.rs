//! # logiccraft-core
//!
//! This crate is the **primary library interface** for LogicCraft. It
//! routes a language tag to the right heuristic analyzer and produces a
//! [`ComplexityResult`].
//!
//! If you are embedding the analyzer into another Rust application, depend
//! on this crate and `logiccraft-types`. Avoid depending on the
//! `logiccraft-analysis-*` microcrates directly unless necessary.
//!
//! ## Example
//!
//! ```rust
//! use logiccraft_core::analyze_complexity;
//!
//! let result = analyze_complexity("for (let i = 0; i < n; i++) { sum += i; }", "javascript");
//! assert_eq!(result.time, "O(N)");
//! assert_eq!(result.space, "O(1)");
//! ```
//!
//! Both entry points are total: any string, any tag, always a verdict.

use std::panic::{self, AssertUnwindSafe};

pub mod accuracy;
pub mod error;
pub mod ffi;

// Re-export types for convenience
pub use logiccraft_types as types;

use logiccraft_analysis_complexity::{Analysis, analyze_source};
use logiccraft_types::{
    AnalyzerFamily, ComplexityExplanation, ComplexityResult, Language, SCHEMA_VERSION,
    SignalSnapshot,
};

/// Estimate time/space complexity, maintainability and cyclomatic
/// complexity of `code`.
///
/// `language` is case-insensitive. `"python"` selects the Python analyzer;
/// every other tag (including unknown ones) uses the JavaScript-family
/// analyzer.
pub fn analyze_complexity(code: &str, language: &str) -> ComplexityResult {
    explain_complexity(code, language).result
}

/// Like [`analyze_complexity`], plus the rule that fired and the detector
/// signals behind it.
pub fn explain_complexity(code: &str, language: &str) -> ComplexityExplanation {
    let lang = Language::from_tag(language);
    let family = lang.family();

    let (rule, signals, result) = match run_guarded(code, family) {
        Some(analysis) => (analysis.rule, analysis.signals, analysis.result),
        None => ("constant", SignalSnapshot::default(), ComplexityResult::baseline()),
    };
    tracing::debug!(
        language = %lang,
        %family,
        rule,
        time = %result.time,
        space = %result.space,
        "complexity estimated"
    );

    ComplexityExplanation {
        schema_version: SCHEMA_VERSION,
        language: lang.as_tag().to_string(),
        family,
        rule: rule.to_string(),
        signals,
        result,
    }
}

/// Run the analyzer, turning a panic into `None`.
///
/// Only effective where panics unwind. On `wasm32-unknown-unknown` the
/// default strategy is `panic = "abort"`, so a panic there traps the
/// module instead of degrading to the baseline.
fn run_guarded(code: &str, family: AnalyzerFamily) -> Option<Analysis> {
    match panic::catch_unwind(AssertUnwindSafe(|| analyze_source(code, family))) {
        Ok(analysis) => Some(analysis),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::warn!(%family, %reason, bytes = code.len(), "analyzer panicked; returning baseline");
            None
        }
    }
}
