// src/analysis/checks/comments.rs
//! Comment-based detectors: filler comments and leftover work markers.

use crate::classify;
use crate::types::{Issue, IssueCode, Severity};

use super::CheckContext;

/// Standalone `#`/`//` comments that restate the code.
pub fn check_low_signal_comments(ctx: &CheckContext, out: &mut Vec<Issue>) {
    for (index, line) in ctx.lines.iter().enumerate() {
        if !classify::is_low_signal_comment(line) {
            continue;
        }
        out.push(
            Issue::at(
                IssueCode::LowSignalComment,
                Severity::Low,
                index + 1,
                "Comment likely restates obvious code behavior.",
            )
            .with_suggestion("Remove it, or replace with rationale and trade-offs."),
        );
    }
}

/// One finding per line opening a comment with TODO/FIXME/XXX.
pub fn check_todo_markers(ctx: &CheckContext, out: &mut Vec<Issue>) {
    for (index, line) in ctx.lines.iter().enumerate() {
        if !classify::is_todo_marker(line) {
            continue;
        }
        out.push(
            Issue::at(
                IssueCode::TodoMarker,
                Severity::Low,
                index + 1,
                "TODO/FIXME marker left in source.",
            )
            .with_suggestion("Resolve it or create a tracked issue reference."),
        );
    }
}
