// src/analysis/checks/exceptions.rs
//! Over-broad exception handlers. Only dialects that report the capability
//! are checked; brace languages' catch blocks are not inspected.

use crate::classify::{self, ExceptionClause};
use crate::types::{Issue, IssueCode, Severity};

use super::CheckContext;

pub fn check_broad_exceptions(ctx: &CheckContext, out: &mut Vec<Issue>) {
    if !ctx.dialect.detects_broad_exceptions() {
        return;
    }

    for (index, line) in ctx.lines.iter().enumerate() {
        let row = index + 1;
        match classify::exception_clause(line, ctx.dialect) {
            Some(ExceptionClause::Bare) => out.push(
                Issue::at(
                    IssueCode::BareExcept,
                    Severity::High,
                    row,
                    "Bare except catches everything and hides failure mode.",
                )
                .with_suggestion("Catch explicit exception types and handle intentionally."),
            ),
            Some(ExceptionClause::Broad) => out.push(
                Issue::at(
                    IssueCode::BroadException,
                    Severity::Medium,
                    row,
                    "Over-broad exception handling reduces observability.",
                )
                .with_suggestion("Catch narrower exception classes and preserve context."),
            ),
            None => {}
        }
    }
}
