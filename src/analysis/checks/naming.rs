// src/analysis/checks/naming.rs
//! Generic identifier names on definitions.

use crate::classify;
use crate::types::{Issue, IssueCode, Severity};

use super::CheckContext;

/// Flags function/class definitions whose name is on the generic denylist.
pub fn check_generic_names(ctx: &CheckContext, out: &mut Vec<Issue>) {
    if !ctx.dialect.detects_generic_names() {
        return;
    }

    for (index, line) in ctx.lines.iter().enumerate() {
        let Some(name) = classify::generic_definition(line, ctx.dialect) else {
            continue;
        };
        out.push(
            Issue::at(
                IssueCode::GenericName,
                Severity::Medium,
                index + 1,
                format!("Generic identifier '{name}' hides domain intent."),
            )
            .with_suggestion("Rename using task-specific domain terms."),
        );
    }
}
