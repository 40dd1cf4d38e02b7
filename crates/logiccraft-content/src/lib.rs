//! # logiccraft-content
//!
//! Source preprocessing for the LogicCraft heuristics.
//!
//! Every analyzer runs on text that has been through [`strip_comments`]
//! first, so keywords inside comments never count as structure. The
//! JS-family path additionally runs [`mask_strings`] before its regex
//! scans.
//!
//! ## Limitations
//!
//! Both passes are textual, not lexical:
//! - comment markers inside string literals are treated as comments
//!   (`"// not a comment"` loses its tail)
//! - `#` inside a Python string starts a comment
//! - regex literals in JavaScript are not recognized
//!
//! Comments are stripped before strings are masked. Newlines inside removed
//! block comments and template literals are kept so line numbers and line
//! counts stay aligned with the input.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use logiccraft_types::AnalyzerFamily;
use regex::{Captures, Regex};

static JS_BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex literal"));

static JS_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("valid regex literal"));

static QUOTED_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\(?s:.))*`"#)
        .expect("valid regex literal")
});

/// Strip comments using the rule for `family`.
///
/// A leading UTF-8 byte order mark is dropped as well, so line-anchored
/// patterns see the first line as written.
///
/// ```
/// use logiccraft_content::strip_comments;
/// use logiccraft_types::AnalyzerFamily;
///
/// assert_eq!(strip_comments("\u{feff}def f():  # x", AnalyzerFamily::Python), "def f():  ");
/// ```
pub fn strip_comments(source: &str, family: AnalyzerFamily) -> String {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    match family {
        AnalyzerFamily::Python => strip_python_comments(source),
        AnalyzerFamily::JsLike => strip_js_comments(source),
    }
}

/// Remove everything from an unescaped `#` to the end of each line.
///
/// ```
/// use logiccraft_content::strip_python_comments;
///
/// assert_eq!(strip_python_comments("x = 1  # note\ny = 2"), "x = 1  \ny = 2");
/// assert_eq!(strip_python_comments(r"s = '\#'"), r"s = '\#'");
/// ```
pub fn strip_python_comments(source: &str) -> String {
    source
        .split('\n')
        .map(strip_python_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_python_line(line: &str) -> &str {
    let mut prev = None;
    for (idx, c) in line.char_indices() {
        if c == '#' && prev != Some('\\') {
            return &line[..idx];
        }
        prev = Some(c);
    }
    line
}

/// Remove `/* ... */` block comments and `// ...` line comments.
///
/// Block comments are not nested; the shortest match wins. An unterminated
/// `/*` is left in place.
///
/// ```
/// use logiccraft_content::strip_js_comments;
///
/// assert_eq!(strip_js_comments("a /* b */ c // d"), "a  c ");
/// assert_eq!(strip_js_comments("a /* one\ntwo */ b"), "a \n b");
/// ```
pub fn strip_js_comments(source: &str) -> String {
    let without_blocks = JS_BLOCK_COMMENT.replace_all(source, |caps: &Captures| {
        "\n".repeat(caps[0].matches('\n').count())
    });
    JS_LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

/// Replace the contents of every quoted literal with nothing, keeping the
/// delimiters (and any newlines of multi-line template literals).
///
/// ```
/// use logiccraft_content::mask_strings;
///
/// assert_eq!(mask_strings(r#"log("for (;;) {")"#), r#"log("")"#);
/// assert_eq!(mask_strings("a = 'it\\'s'; b = `x\ny`"), "a = ''; b = `\n`");
/// ```
pub fn mask_strings(source: &str) -> String {
    QUOTED_STRING
        .replace_all(source, |caps: &Captures| {
            let literal = &caps[0];
            let delimiter = &literal[..1];
            let newlines = "\n".repeat(literal.matches('\n').count());
            format!("{delimiter}{newlines}{delimiter}")
        })
        .into_owned()
}

/// Number of `\n`-separated lines, counting a trailing empty line.
///
/// The empty string is one (empty) line.
pub fn line_count(source: &str) -> usize {
    source.split('\n').count()
}

/// Number of leading whitespace characters (spaces and tabs count as one).
pub fn leading_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// True for whitespace-only lines and lines whose first visible character
/// starts a comment for `family`.
pub fn is_blank_or_comment(line: &str, family: AnalyzerFamily) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }
    match family {
        AnalyzerFamily::Python => trimmed.starts_with('#'),
        AnalyzerFamily::JsLike => trimmed.starts_with("//") || trimmed.starts_with("/*"),
    }
}

/// Read up to `max_bytes` from the start of a file.
pub fn read_head(path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut buf = Vec::new();
    file.take(max_bytes as u64)
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(buf)
}

/// Read a source file as text, capped at `max_bytes`.
///
/// Invalid UTF-8 is replaced rather than rejected: the analyzer must
/// produce a verdict for any input.
pub fn read_source_capped(path: &Path, max_bytes: usize) -> Result<String> {
    let bytes = read_head(path, max_bytes)?;
    Ok(decode_lossy(&bytes))
}

/// Decode bytes as UTF-8, replacing invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
