// src/analysis/mod.rs
//! Issue detection: runs the detectors over one file and scans batches.

pub mod ast;
pub mod checks;
pub mod scoring;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{Config, RuleConfig};
use crate::discovery;
use crate::error::Result;
use crate::lang::Dialect;
use crate::types::{FileError, FileReport, Issue, ScanReport};

use self::ast::{ParseOutcome, SyntaxTree};
use self::checks::CheckContext;

/// Analyzes `text` with the default thresholds.
#[must_use]
pub fn analyze(text: &str, dialect: Dialect) -> Vec<Issue> {
    analyze_with(text, dialect, &RuleConfig::default())
}

/// Runs every detector in its fixed order. Issues keep emission order.
#[must_use]
pub fn analyze_with(text: &str, dialect: Dialect, rules: &RuleConfig) -> Vec<Issue> {
    let lines: Vec<&str> = text.lines().collect();
    let ctx = CheckContext {
        lines: &lines,
        source: text,
        dialect,
        config: rules,
    };

    let mut issues = Vec::new();
    checks::check_generic_names(&ctx, &mut issues);
    checks::check_broad_exceptions(&ctx, &mut issues);
    checks::check_low_signal_comments(&ctx, &mut issues);
    checks::check_nesting(&ctx, &mut issues);
    checks::check_duplicate_blocks(&ctx, &mut issues);
    checks::check_todo_markers(&ctx, &mut issues);
    let parsed = if dialect.supports_grammar() {
        SyntaxTree::parse(text, dialect)
    } else {
        ParseOutcome::Unavailable
    };
    checks::check_long_functions(&ctx, &parsed, &mut issues);
    checks::check_large_file(&ctx, &mut issues);
    issues
}

/// Reads and analyzes one file, picking the dialect from its extension.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn analyze_file(path: &Path, rules: &RuleConfig) -> Result<FileReport> {
    let source = discovery::read_source(path)?;
    let dialect = Dialect::from_path(path);
    let issues = analyze_with(&source.text, dialect, rules);
    tracing::debug!(path = %path.display(), ?dialect, issues = issues.len(), "analyzed");
    Ok(FileReport::new(path, issues))
}

/// The scan engine. Files are analyzed in parallel and reported in input order.
pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes every file. Unreadable files become [`FileError`]s.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        let start = std::time::Instant::now();

        let outcomes: Vec<Result<FileReport>> = files
            .par_iter()
            .map(|path| analyze_file(path, &self.config.rules))
            .collect();

        let mut reports = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();
        for (path, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    errors.push(FileError {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        ScanReport {
            total_issues: reports.iter().map(|r| r.issues().len()).sum(),
            files: reports,
            errors,
            duration_ms: start.elapsed().as_millis(),
        }
    }
}
