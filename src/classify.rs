// src/classify.rs
//! Stateless line classification shared by the detectors and the rewriter.

use crate::lang::Dialect;
use crate::rules::{
    GENERIC_IDENTIFIER_NAMES, LINE_COMMENT_PREFIXES, LOW_SIGNAL_COMMENT_PATTERNS,
    PY_BARE_EXCEPT_RE, PY_BROAD_EXCEPT_RE, TODO_COMMENT_RE,
};

/// Spaces per indentation level when estimating Python nesting.
const INDENT_WIDTH: usize = 4;

/// Kinds of over-broad exception clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionClause {
    /// `except:` with no type at all.
    Bare,
    /// `except Exception:` optionally binding a name.
    Broad,
}

/// Returns the trimmed comment body when the trimmed line starts with one of `prefixes`.
/// Only the first occurrence of the prefix is removed.
#[must_use]
pub fn comment_body<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    let stripped = line.trim();
    prefixes
        .iter()
        .find_map(|prefix| stripped.strip_prefix(prefix))
        .map(str::trim)
}

/// True when a comment body restates the obvious.
#[must_use]
pub fn is_low_signal_body(body: &str) -> bool {
    !body.is_empty()
        && LOW_SIGNAL_COMMENT_PATTERNS
            .iter()
            .any(|pattern| pattern.is_match(body))
}

/// Standalone `#` or `//` comment line with a filler body.
#[must_use]
pub fn is_low_signal_comment(line: &str) -> bool {
    is_low_signal_comment_with(line, LINE_COMMENT_PREFIXES)
}

/// Same as [`is_low_signal_comment`], restricted to the given prefixes.
#[must_use]
pub fn is_low_signal_comment_with(line: &str, prefixes: &[&str]) -> bool {
    comment_body(line, prefixes).is_some_and(is_low_signal_body)
}

/// True for lines whose trimmed text is a full-line `#` or `//` comment.
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    let stripped = line.trim();
    LINE_COMMENT_PREFIXES
        .iter()
        .any(|prefix| stripped.starts_with(prefix))
}

/// Name declared on this line, if the dialect recognizes a definition here.
#[must_use]
pub fn definition_name(line: &str, dialect: Dialect) -> Option<&str> {
    let caps = dialect.definition_pattern()?.captures(line)?;
    ["name", "func", "arrow"]
        .iter()
        .find_map(|group| caps.name(group))
        .map(|m| m.as_str())
}

/// Declared name when it matches the generic-identifier denylist.
#[must_use]
pub fn generic_definition(line: &str, dialect: Dialect) -> Option<&str> {
    definition_name(line, dialect).filter(|name| is_generic_identifier(name))
}

#[must_use]
pub fn is_generic_identifier(name: &str) -> bool {
    let lowered = name.to_lowercase();
    GENERIC_IDENTIFIER_NAMES.contains(&lowered.as_str())
}

#[must_use]
pub fn exception_clause(line: &str, dialect: Dialect) -> Option<ExceptionClause> {
    if !dialect.detects_broad_exceptions() {
        return None;
    }
    if PY_BARE_EXCEPT_RE.is_match(line) {
        Some(ExceptionClause::Bare)
    } else if PY_BROAD_EXCEPT_RE.is_match(line) {
        Some(ExceptionClause::Broad)
    } else {
        None
    }
}

/// Indentation depth from leading spaces. Blank and `#` lines carry no depth.
#[must_use]
pub fn indent_depth(line: &str) -> Option<usize> {
    let stripped = line.trim();
    if stripped.is_empty() || stripped.starts_with('#') {
        return None;
    }
    let leading = line.len() - line.trim_start_matches(' ').len();
    Some(leading / INDENT_WIDTH)
}

/// Net change in brace depth contributed by a line.
#[must_use]
pub fn brace_delta(line: &str) -> isize {
    line.chars().fold(0, |depth, c| match c {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}

#[must_use]
pub fn is_todo_marker(line: &str) -> bool {
    TODO_COMMENT_RE.is_match(line)
}
