//! Text, Markdown and JSON rendering of verdicts and accuracy reports.

use std::fmt::Write as _;

use anyhow::Result;
use logiccraft_analysis_maintainability::grade_for_score;
use logiccraft_types::{AccuracyReport, ComplexityExplanation, ComplexityResult, OutputFormat};

pub fn render_result(result: &ComplexityResult, format: OutputFormat, origin: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result_text(result, origin)),
        OutputFormat::Md => Ok(result_md(result, origin)),
        OutputFormat::Json => json(result),
    }
}

pub fn render_explanation(
    explanation: &ComplexityExplanation,
    format: OutputFormat,
    origin: &str,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = result_text(&explanation.result, origin);
            out.push_str(&signals_text(explanation));
            Ok(out)
        }
        OutputFormat::Md => {
            let mut out = result_md(&explanation.result, origin);
            out.push_str(&signals_md(explanation));
            Ok(out)
        }
        OutputFormat::Json => json(explanation),
    }
}

pub fn render_accuracy(report: &AccuracyReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(accuracy_text(report)),
        OutputFormat::Md => Ok(accuracy_md(report)),
        OutputFormat::Json => json(report),
    }
}

fn json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn result_text(r: &ComplexityResult, origin: &str) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "source: {origin}");
    let _ = writeln!(s, "time: {}", r.time);
    let _ = writeln!(s, "space: {}", r.space);
    let _ = writeln!(
        s,
        "maintainability: {} ({})",
        r.maintainability,
        grade_for_score(r.maintainability)
    );
    let _ = writeln!(s, "cyclomatic: {}", r.cyclomatic);
    s
}

fn result_md(r: &ComplexityResult, origin: &str) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "## Complexity: `{origin}`\n");
    s.push_str("|Metric|Value|\n|---|---|\n");
    let _ = writeln!(s, "|Time|{}|", r.time);
    let _ = writeln!(s, "|Space|{}|", r.space);
    let _ = writeln!(
        s,
        "|Maintainability|{} ({})|",
        r.maintainability,
        grade_for_score(r.maintainability)
    );
    let _ = writeln!(s, "|Cyclomatic|{}|", r.cyclomatic);
    s
}

fn signal_rows(e: &ComplexityExplanation) -> Vec<(&'static str, String)> {
    let sig = &e.signals;
    let mut rows = vec![
        ("language", format!("{} ({})", e.language, e.family)),
        ("rule", e.rule.clone()),
        ("recursive", sig.is_recursive.to_string()),
        ("midpoint", sig.has_midpoint.to_string()),
        ("while", sig.has_while.to_string()),
        ("loop nesting", sig.max_loop_nesting.to_string()),
    ];
    if let Some(dc) = sig.divide_and_conquer {
        rows.push(("divide and conquer", dc.to_string()));
    }
    if let Some(bf) = sig.branching_factor {
        rows.push(("branching factor", bf.to_string()));
    }
    if let Some(reason) = &sig.space_reason {
        rows.push(("space reason", reason.clone()));
    }
    rows
}

fn signals_text(e: &ComplexityExplanation) -> String {
    let mut s = String::from("\n");
    for (key, value) in signal_rows(e) {
        let _ = writeln!(s, "{key}: {value}");
    }
    s
}

fn signals_md(e: &ComplexityExplanation) -> String {
    let mut s = String::from("\n### Signals\n\n|Signal|Value|\n|---|---|\n");
    for (key, value) in signal_rows(e) {
        let _ = writeln!(s, "|{key}|{value}|");
    }
    s
}

fn accuracy_text(report: &AccuracyReport) -> String {
    let mut s = String::new();
    for case in &report.cases {
        if case.passed {
            let _ = writeln!(s, "PASS  {}", case.name);
        } else {
            let _ = writeln!(s, "FAIL  {}", case.name);
            let _ = writeln!(s, "      expected: {} / {}", case.expected_time, case.expected_space);
            let _ = writeln!(s, "      actual:   {} / {}", case.actual_time, case.actual_space);
        }
    }
    let _ = writeln!(
        s,
        "\n{}/{} passed ({}%)",
        report.passed,
        report.total,
        report.pass_rate()
    );
    s
}

fn accuracy_md(report: &AccuracyReport) -> String {
    let mut s = String::from("## Accuracy\n\n");
    s.push_str("|Case|Lang|Expected|Actual|Result|\n|---|---|---|---|---|\n");
    for case in &report.cases {
        let _ = writeln!(
            s,
            "|{}|{}|{} / {}|{} / {}|{}|",
            case.name,
            case.language,
            case.expected_time,
            case.expected_space,
            case.actual_time,
            case.actual_space,
            if case.passed { "pass" } else { "fail" }
        );
    }
    let _ = writeln!(
        s,
        "\n**{}/{} passed** ({}%)",
        report.passed,
        report.total,
        report.pass_rate()
    );
    s
}
