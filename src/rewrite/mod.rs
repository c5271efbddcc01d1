// src/rewrite/mod.rs
//! Safe rewrites: trailing whitespace, excess blank lines, and standalone
//! low-signal comments. Nothing else is ever touched.

pub mod writer;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::ast::SyntaxTree;
use crate::analysis::Engine;
use crate::classify;
use crate::config::RuleConfig;
use crate::discovery;
use crate::error::Result;
use crate::lang::Dialect;
use crate::types::{FileError, RewriteReport, RewriteResult};

/// Rewrites `text` with the default blank-run limit.
#[must_use]
pub fn rewrite(text: &str, dialect: Dialect) -> (String, usize) {
    rewrite_with(text, dialect, RuleConfig::default().max_blank_run)
}

/// Single forward pass. Returns the new text and the number of line edits.
///
/// Every kept line carries its own terminator, so mixed `\n`/`\r\n` files
/// keep their endings line by line.
#[must_use]
pub fn rewrite_with(text: &str, dialect: Dialect, max_blank_run: usize) -> (String, usize) {
    let removable = removable_comment_lines(text, dialect);
    let mut changes = 0;
    let mut blank_run = 0;
    let mut kept: Vec<(&str, &str)> = Vec::new();

    for (index, segment) in text.split_inclusive('\n').enumerate() {
        let (raw, terminator) = split_terminator(segment);
        let line = raw.trim_end();
        if line.len() != raw.len() {
            changes += 1;
        }

        if removable.contains(&index) {
            changes += 1;
            continue;
        }

        if line.is_empty() {
            blank_run += 1;
            if blank_run > max_blank_run {
                changes += 1;
                continue;
            }
        } else {
            blank_run = 0;
        }
        kept.push((line, terminator));
    }

    if !text.ends_with('\n') {
        // A whitespace-only last line without a terminator would become a new terminator.
        while kept.last().is_some_and(|(line, _)| line.is_empty()) {
            kept.pop();
            changes += 1;
        }
        if let Some(last) = kept.last_mut() {
            last.1 = "";
        }
    }

    let mut output = String::with_capacity(text.len());
    for (line, terminator) in kept {
        output.push_str(line);
        output.push_str(terminator);
    }
    (output, changes)
}

/// 0-based indices of lines that hold nothing but a low-signal comment.
///
/// Python relies on grammar comment tokens so text inside string literals is
/// never matched. If the source does not parse, nothing is removable.
#[must_use]
pub fn removable_comment_lines(text: &str, dialect: Dialect) -> HashSet<usize> {
    let prefixes = dialect.comment_prefixes();

    if dialect.supports_grammar() {
        let parsed = SyntaxTree::parse(text, dialect);
        let Some(tree) = parsed.tree() else {
            tracing::debug!(?dialect, "no comment tokens; comment removal disabled");
            return HashSet::new();
        };
        return tree
            .standalone_comments(text)
            .into_iter()
            .filter(|c| classify::is_low_signal_comment_with(&c.text, prefixes))
            .map(|c| c.row)
            .collect();
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| classify::is_low_signal_comment_with(line, prefixes))
        .map(|(index, _)| index)
        .collect()
}

fn split_terminator(segment: &str) -> (&str, &str) {
    if let Some(body) = segment.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = segment.strip_suffix('\n') {
        (body, "\n")
    } else {
        (segment, "")
    }
}

/// Rewrites one file. The file is written only when `apply` is set and the
/// text changed. Lossily decoded files are previewed but never written.
///
/// # Errors
/// Returns error if the file cannot be read or written.
pub fn rewrite_file(path: &Path, apply: bool, rules: &RuleConfig) -> Result<RewriteResult> {
    let source = discovery::read_source(path)?;
    let dialect = Dialect::from_path(path);
    let (rewritten, change_count) = rewrite_with(&source.text, dialect, rules.max_blank_run);
    let result = RewriteResult::new(path, source.text, rewritten, change_count);

    if apply && result.changed() {
        if source.lossy {
            tracing::warn!(path = %path.display(), "not valid UTF-8; rewrite not applied");
        } else {
            writer::write_back(path, result.rewritten())?;
        }
    }
    Ok(result)
}

impl Engine {
    /// Rewrites every file in parallel. Results keep input order.
    #[must_use]
    pub fn rewrite(&self, files: &[PathBuf], apply: bool) -> RewriteReport {
        let rules = &self.config().rules;
        let outcomes: Vec<Result<RewriteResult>> = files
            .par_iter()
            .map(|path| rewrite_file(path, apply, rules))
            .collect();

        let mut report = RewriteReport {
            applied: apply,
            ..RewriteReport::default()
        };
        for (path, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(result) => report.results.push(result),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "rewrite skipped");
                    report.errors.push(FileError {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        report
    }
}
