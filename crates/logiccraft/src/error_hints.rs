use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to load config") {
        push_hint(
            &mut out,
            "Check the TOML syntax; allowed tables are [analyze] and [accuracy].",
        );
        push_hint(&mut out, "Allowed formats are \"text\", \"md\" and \"json\".");
    } else if haystack.contains("failed to open")
        || haystack.contains("no such file or directory")
    {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(&mut out, "Pass `-` (or no path) to read the source from stdin.");
    }

    if haystack.contains("accuracy below threshold") {
        push_hint(
            &mut out,
            "Run `logiccraft accuracy` without --fail-under to see which cases fail.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
