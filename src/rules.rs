// src/rules.rs
//! Pattern catalog: severity weights, default file sets, identifier
//! denylist and the compiled line patterns shared by detection and rewrite.
//!
//! Everything here is read-only. A new detector adds a pattern here and an
//! `IssueCode`; the engine's orchestration does not change.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Severity;

// --- Scoring ---
/// Only this many issues (in emission order) contribute to a file's score.
pub const SCORED_ISSUE_LIMIT: usize = 20;
pub const MAX_SCORE: u32 = 100;

#[must_use]
pub const fn severity_weight(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => 25,
        Severity::High => 15,
        Severity::Medium => 8,
        Severity::Low => 4,
    }
}

// --- Discovery ---
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".go", ".rs", ".c", ".cc", ".cpp", ".h", ".hpp",
    ".cs", ".php", ".rb",
];

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "node_modules",
    "__pycache__",
    ".pytest_cache",
    "dist",
    "build",
];

pub const TEST_DIRS: &[&str] = &["test", "tests", "__tests__"];

// --- Naming ---
pub const GENERIC_IDENTIFIER_NAMES: &[&str] = &[
    "process_data",
    "handle_request",
    "helper",
    "utils",
    "util",
    "manager",
    "service",
    "main_logic",
    "do_stuff",
    "process",
    "handler",
];

// --- Comments ---
/// Prefixes recognized by the line-based comment detectors.
pub const LINE_COMMENT_PREFIXES: &[&str] = &["#", "//"];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid Regex: {pattern}"))
}

/// Filler shapes matched against a comment body with the prefix removed.
pub static LOW_SIGNAL_COMMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^\s*(this|that)\s+(function|method|class)\s+",
        r"(?i)^\s*(simply|just)\s+",
        r"(?i)^\s*(sets?|gets?|returns?|checks?)\s+",
        r"(?i)^\s*(initialize|initializes)\s+",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

pub static TODO_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*(#|//|/\*)\s*(TODO|FIXME|XXX)\b"));

// --- Exceptions (Python) ---
pub static PY_BARE_EXCEPT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*except\s*:\s*$"));

pub static PY_BROAD_EXCEPT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\s*except\s+Exception(?:\s+as\s+\w+)?\s*:\s*$"));

// --- Signatures ---
pub static PY_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^\s*(?:(?:async\s+)?def|class)\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*)\b")
});

pub static JS_FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^\s*(?:export\s+(?:default\s+)?)?(?:async\s+)?(?:function(?:\s*\*\s*|\s+)(?P<func>[A-Za-z_$][A-Za-z0-9_$]*)|const\s+(?P<arrow>[A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s*)?\()",
    )
});
