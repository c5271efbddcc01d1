// src/analysis/checks/duplicates.rs
//! File-local repeated blocks.
//!
//! Blank and full-line comment lines are dropped, then a fixed window slides
//! over the surviving lines. A window whose texts recur is reported at its
//! second occurrence. Windows made of one repeated line (`}` runs, separators)
//! never count.

use std::collections::HashMap;

use crate::classify;
use crate::types::{Issue, IssueCode, Severity};

use super::CheckContext;

pub fn check_duplicate_blocks(ctx: &CheckContext, out: &mut Vec<Issue>) {
    let window = ctx.config.duplicate_window;
    let limit = ctx.config.max_duplicate_findings;
    if window == 0 || limit == 0 {
        return;
    }

    let normalized = normalized_lines(ctx.lines);
    if normalized.len() < window * 2 {
        return;
    }

    let blocks = index_windows(&normalized, window);
    let mut reported = 0;
    for (block, starts) in blocks {
        if reported >= limit {
            break;
        }
        let Some(&second) = starts.get(1) else {
            continue;
        };
        if is_uniform(&block) {
            continue;
        }
        out.push(
            Issue::at(
                IssueCode::DuplicateBlock,
                Severity::Medium,
                second,
                format!(
                    "Repeated {window}-line block appears {} times.",
                    starts.len()
                ),
            )
            .with_suggestion("Extract shared behavior when repetition represents one concept."),
        );
        reported += 1;
    }
}

/// (1-based line, trimmed text) for every line that is neither blank nor a comment.
fn normalized_lines<'a>(lines: &[&'a str]) -> Vec<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let stripped = line.trim();
            if stripped.is_empty() || classify::is_comment_line(stripped) {
                None
            } else {
                Some((index + 1, stripped))
            }
        })
        .collect()
}

/// Window fingerprints with their start lines, in order of first appearance.
fn index_windows<'a>(
    normalized: &[(usize, &'a str)],
    window: usize,
) -> Vec<(Vec<&'a str>, Vec<usize>)> {
    let mut order: Vec<(Vec<&'a str>, Vec<usize>)> = Vec::new();
    let mut slots: HashMap<Vec<&'a str>, usize> = HashMap::new();

    for chunk in normalized.windows(window) {
        let Some(&(start, _)) = chunk.first() else {
            continue;
        };
        let block: Vec<&str> = chunk.iter().map(|(_, text)| *text).collect();
        if let Some(&slot) = slots.get(&block) {
            if let Some((_, starts)) = order.get_mut(slot) {
                starts.push(start);
            }
        } else {
            slots.insert(block.clone(), order.len());
            order.push((block, vec![start]));
        }
    }
    order
}

fn is_uniform(block: &[&str]) -> bool {
    block.windows(2).all(|pair| pair[0] == pair[1])
}
