// src/analysis/checks/size.rs
//! Size limits: over-long functions (grammar-backed) and oversized files.

use crate::analysis::ast::ParseOutcome;
use crate::types::{Issue, IssueCode, Severity};

use super::CheckContext;

/// One finding per function longer than the limit. An unavailable parse yields nothing.
pub fn check_long_functions(ctx: &CheckContext, parsed: &ParseOutcome, out: &mut Vec<Issue>) {
    let Some(tree) = parsed.tree() else {
        return;
    };

    for span in tree.function_spans(ctx.source) {
        let length = span.len();
        if length <= ctx.config.max_function_lines {
            continue;
        }
        out.push(
            Issue::at(
                IssueCode::LongFunction,
                Severity::Medium,
                span.start_line,
                format!("Function '{}' is {length} lines long.", span.name),
            )
            .with_suggestion("Split into composable functions with explicit responsibilities."),
        );
    }
}

/// File-scoped finding anchored at line 1.
pub fn check_large_file(ctx: &CheckContext, out: &mut Vec<Issue>) {
    if ctx.lines.len() <= ctx.config.max_file_lines {
        return;
    }
    out.push(
        Issue::at(
            IssueCode::LargeFile,
            Severity::Low,
            1,
            "Very large file; split responsibilities to improve readability.",
        )
        .with_suggestion("Refactor into smaller modules with clear ownership."),
    );
}
