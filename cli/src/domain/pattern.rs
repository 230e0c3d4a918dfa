//! Pure helpers for glob patterns: brace expansion and literal-prefix split.
//!
//! The filesystem walk lives in `crate::infra::glob`; everything here is
//! string manipulation so it can be tested without a directory tree.

const META: &[char] = &['*', '?', '[', '{', '\\'];

/// Returns `true` if `segment` contains any glob metacharacter.
#[must_use]
pub fn has_glob_meta(segment: &str) -> bool {
    segment.contains(META)
}

/// Expand `{a,b}` alternations, left to right, into plain glob patterns.
///
/// Nested groups are supported and the output order follows the order of the
/// alternatives, so `{a,b}/{c,d}` yields `a/c`, `a/d`, `b/c`, `b/d`. A `{`
/// without a matching `}` is left untouched. Backslash escapes are skipped
/// over and preserved.
#[must_use]
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = first_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };
    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    split_alternatives(&pattern[open + 1..close])
        .into_iter()
        .flat_map(|alt| expand_braces(&format!("{prefix}{alt}{suffix}")))
        .collect()
}

/// Byte offsets of the first top-level `{` and its matching `}`.
fn first_brace_group(pattern: &str) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut open = None;
    let mut escaped = false;
    for (i, c) in pattern.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => {
                if depth == 0 {
                    open = Some(i);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return open.map(|o| (o, i));
                }
            }
            _ => {}
        }
    }
    None
}

/// Split the body of a brace group on commas that are not nested.
fn split_alternatives(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

/// A brace-free pattern split into the directory to walk and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRoot {
    /// Leading path components with no metacharacters (`.` if none).
    pub base: String,
    /// `false` when the whole pattern is literal and names a single path.
    pub is_glob: bool,
}

/// Split a brace-free pattern at its first component containing a
/// metacharacter.
#[must_use]
pub fn split_literal_prefix(pattern: &str) -> PatternRoot {
    let components: Vec<&str> = pattern.split('/').collect();
    let Some(first_glob) = components.iter().position(|c| has_glob_meta(c)) else {
        return PatternRoot {
            base: pattern.to_string(),
            is_glob: false,
        };
    };
    let base = components[..first_glob].join("/");
    let base = if base.is_empty() {
        let root = if pattern.starts_with('/') { "/" } else { "." };
        root.to_string()
    } else {
        base
    };
    PatternRoot {
        base,
        is_glob: true,
    }
}
