//! # logiccraft-analysis-complexity
//!
//! **Tier 2 (Heuristics)**
//!
//! Pattern-based Big-O estimation. Each analyzer gathers a small set of
//! textual signals (recursion, loop nesting, midpoint arithmetic,
//! allocation calls) and feeds them to an ordered rule table.
//!
//! ## Limitations
//! * No parsing: everything is regex and line scanning.
//! * Graph traversals (BFS/DFS over adjacency lists) are not recognized.
//! * Results are estimates for a playground, not proofs.

mod js;
mod python;
pub mod rules;

pub use js::{JS_RULES, JsSignals, analyze_js};
pub use python::{PY_RULES, PySignals, analyze_python};

use logiccraft_content::strip_comments;
use logiccraft_types::{AnalyzerFamily, ComplexityResult, SignalSnapshot};

/// Everything one analyzer run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub result: ComplexityResult,
    pub family: AnalyzerFamily,
    /// Name of the rule that decided the time class.
    pub rule: &'static str,
    pub signals: SignalSnapshot,
}

/// Strip comments for `family` and run its analyzer.
///
/// ```
/// use logiccraft_analysis_complexity::analyze_source;
/// use logiccraft_types::AnalyzerFamily;
///
/// let a = analyze_source("for (let i=0;i<n;i++){ sum+=i; }", AnalyzerFamily::JsLike);
/// assert_eq!(a.result.time, "O(N)");
/// assert_eq!(a.rule, "single-loop");
/// ```
pub fn analyze_source(source: &str, family: AnalyzerFamily) -> Analysis {
    let stripped = strip_comments(source, family);
    match family {
        AnalyzerFamily::Python => analyze_python(&stripped),
        AnalyzerFamily::JsLike => analyze_js(&stripped),
    }
}

/// Detector helpers, exposed for diagnostics and tests.
pub mod detect {
    pub mod js {
        pub use crate::js::{
            allocation_pattern, branching_factor, max_loop_nesting, recursive_functions,
        };
    }

    pub mod python {
        pub use crate::python::{first_def_is_recursive, max_loop_nesting};
    }
}
