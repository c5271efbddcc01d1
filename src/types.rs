// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::analysis::scoring;

/// Ordinal importance of an issue: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Scoring weight from the pattern catalog.
    #[must_use]
    pub fn weight(self) -> u32 {
        crate::rules::severity_weight(self)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed taxonomy of detector findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    GenericName,
    BareExcept,
    BroadException,
    LowSignalComment,
    DeepNesting,
    DuplicateBlock,
    TodoMarker,
    LongFunction,
    LargeFile,
}

impl IssueCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GenericName => "GENERIC_NAME",
            Self::BareExcept => "BARE_EXCEPT",
            Self::BroadException => "BROAD_EXCEPTION",
            Self::LowSignalComment => "LOW_SIGNAL_COMMENT",
            Self::DeepNesting => "DEEP_NESTING",
            Self::DuplicateBlock => "DUPLICATE_BLOCK",
            Self::TodoMarker => "TODO_MARKER",
            Self::LongFunction => "LONG_FUNCTION",
            Self::LargeFile => "LARGE_FILE",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding produced by one detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub code: IssueCode,
    pub severity: Severity,
    pub message: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Issue {
    /// Creates an issue anchored to a 1-based source line.
    #[must_use]
    pub fn at(code: IssueCode, severity: Severity, line: usize, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            line: Some(line),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Analysis results for a single file. The score is derived once from the
/// issue list and cannot drift from it.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    path: PathBuf,
    score: u32,
    issues: Vec<Issue>,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, issues: Vec<Issue>) -> Self {
        Self {
            path: path.into(),
            score: scoring::calculate_score(&issues),
            issues,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns true if no issues were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A path that could not be processed. Reported, never fatal to the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregated results from scanning multiple files, in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub errors: Vec<FileError>,
    pub total_issues: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Number of files that were analyzed.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Reports carrying at least one issue.
    pub fn flagged(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_clean())
    }

    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.flagged().count()
    }
}

/// Before/after snapshot of one rewrite. `changed` is fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResult {
    path: PathBuf,
    changed: bool,
    original: String,
    rewritten: String,
    change_count: usize,
}

impl RewriteResult {
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        original: String,
        rewritten: String,
        change_count: usize,
    ) -> Self {
        Self {
            path: path.into(),
            changed: rewritten != original,
            original,
            rewritten,
            change_count,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.changed
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn rewritten(&self) -> &str {
        &self.rewritten
    }

    #[must_use]
    pub fn change_count(&self) -> usize {
        self.change_count
    }
}

/// Aggregated rewrite results, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct RewriteReport {
    pub results: Vec<RewriteResult>,
    pub errors: Vec<FileError>,
    pub applied: bool,
}

impl RewriteReport {
    pub fn changed(&self) -> impl Iterator<Item = &RewriteResult> {
        self.results.iter().filter(|r| r.changed())
    }

    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.changed().map(RewriteResult::change_count).sum()
    }
}
