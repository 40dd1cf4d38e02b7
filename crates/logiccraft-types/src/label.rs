//! Big-O label canonicalization.
//!
//! Heuristics and external reports spell the same class in several ways
//! (`O(n^2)`, `O(N^2)`, `O(N²)`; `O(n logn)`, `O(N log N)`). Every label
//! leaving the analyzer goes through [`normalize_label`] so comparisons are
//! plain string equality.

/// Canonicalize a complexity label.
///
/// - a standalone lowercase `n` becomes `N`
/// - `N^2` / `N^3` become `N²` / `N³`
/// - `logN` and `NlogN` get single spaces: `N log N`
///
/// The function is idempotent and never fails; unknown labels pass through
/// with only the rewrites above applied.
///
/// ```
/// use logiccraft_types::normalize_label;
///
/// assert_eq!(normalize_label("O(n^2)"), "O(N²)");
/// assert_eq!(normalize_label("O(n logn)"), "O(N log N)");
/// assert_eq!(normalize_label("O(R*C)"), "O(R*C)");
/// ```
pub fn normalize_label(label: &str) -> String {
    let upper = uppercase_standalone_n(label);
    let spaced = space_log(&upper);
    spaced.replace("N^2", "N²").replace("N^3", "N³")
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn uppercase_standalone_n(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    let mut out = String::with_capacity(label.len());
    for (i, &c) in chars.iter().enumerate() {
        let prev_ident = i > 0 && is_ident_char(chars[i - 1]);
        let next_ident = chars.get(i + 1).copied().is_some_and(is_ident_char);
        if c == 'n' && !prev_ident && !next_ident {
            out.push('N');
        } else {
            out.push(c);
        }
    }
    out
}

fn space_log(label: &str) -> String {
    // `n` glued to `log` is not standalone, so handle both cases here.
    let glued = label
        .replace("logn", "log N")
        .replace("logN", "log N")
        .replace("nlog", "N log")
        .replace("Nlog", "N log");
    collapse_spaces(&glued)
}

fn collapse_spaces(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_space = false;
    for c in label.chars() {
        if c == ' ' {
            if !last_space {
                out.push(c);
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_only_standalone_n() {
        assert_eq!(normalize_label("O(n)"), "O(N)");
        assert_eq!(normalize_label("O(log n)"), "O(log N)");
        assert_eq!(normalize_label("O(n!)"), "O(N!)");
        assert_eq!(normalize_label("O(nodes)"), "O(nodes)");
    }

    #[test]
    fn canonicalizes_powers() {
        assert_eq!(normalize_label("O(N^2)"), "O(N²)");
        assert_eq!(normalize_label("O(n^3)"), "O(N³)");
        assert_eq!(normalize_label("O(2^n)"), "O(2^N)");
    }

    #[test]
    fn canonicalizes_log_spacing() {
        assert_eq!(normalize_label("O(N logN)"), "O(N log N)");
        assert_eq!(normalize_label("O(NlogN)"), "O(N log N)");
        assert_eq!(normalize_label("O(nlogn)"), "O(N log N)");
        assert_eq!(normalize_label("O(N  log  N)"), "O(N log N)");
    }

    #[test]
    fn composite_labels_pass_through() {
        assert_eq!(normalize_label("O((V+E) log V)"), "O((V+E) log V)");
        assert_eq!(normalize_label("O(R*C)"), "O(R*C)");
    }

    #[test]
    fn idempotent_on_samples() {
        for s in ["O(n logn)", "O(n^2)", "O(1)", "O(N!)", "x n y", ""] {
            let once = normalize_label(s);
            assert_eq!(normalize_label(&once), once);
        }
    }
}
