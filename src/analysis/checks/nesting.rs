// src/analysis/checks/nesting.rs
//! Nesting depth estimate. Reports only the first offending line.

use crate::classify;
use crate::lang::NestingStyle;
use crate::types::{Issue, IssueCode, Severity};

use super::CheckContext;

pub fn check_nesting(ctx: &CheckContext, out: &mut Vec<Issue>) {
    let finding = match ctx.dialect.nesting() {
        NestingStyle::Indentation => first_deep_indent(ctx),
        NestingStyle::Braces => first_deep_brace(ctx),
        NestingStyle::Unchecked => None,
    };
    out.extend(finding);
}

fn first_deep_indent(ctx: &CheckContext) -> Option<Issue> {
    let limit = ctx.config.max_indent_depth;
    let (index, _) = ctx
        .lines
        .iter()
        .enumerate()
        .find(|(_, line)| classify::indent_depth(line).is_some_and(|depth| depth >= limit))?;

    Some(
        Issue::at(
            IssueCode::DeepNesting,
            Severity::Medium,
            index + 1,
            "Deep nesting increases cognitive load.",
        )
        .with_suggestion("Use guard clauses and extract focused helper functions."),
    )
}

fn first_deep_brace(ctx: &CheckContext) -> Option<Issue> {
    let limit = isize::try_from(ctx.config.max_brace_depth).unwrap_or(isize::MAX);
    let mut depth: isize = 0;

    for (index, line) in ctx.lines.iter().enumerate() {
        depth += classify::brace_delta(line);
        if depth >= limit {
            return Some(
                Issue::at(
                    IssueCode::DeepNesting,
                    Severity::Medium,
                    index + 1,
                    "Deep brace nesting indicates complex control flow.",
                )
                .with_suggestion("Split branches into smaller units and return early."),
            );
        }
    }
    None
}
