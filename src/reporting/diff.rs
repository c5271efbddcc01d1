// src/reporting/diff.rs
//! Line diff for rewrite previews.
//!
//! Rewrites only trim or delete lines, so a greedy forward alignment is exact:
//! each rewritten line matches the next original line with the same trimmed
//! text, and everything skipped over was deleted.

use std::fmt::Write;

/// Lines of unchanged context around each hunk.
const CONTEXT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op<'a> {
    Keep(&'a str),
    Delete(&'a str),
    Insert(&'a str),
    Replace(&'a str, &'a str),
}

impl Op<'_> {
    fn is_change(self) -> bool {
        !matches!(self, Op::Keep(_))
    }

    fn old_len(self) -> usize {
        usize::from(!matches!(self, Op::Insert(_)))
    }

    fn new_len(self) -> usize {
        usize::from(!matches!(self, Op::Delete(_)))
    }
}

fn align<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Op<'a>> {
    let mut ops = Vec::with_capacity(old.len());
    let mut next = new.iter().peekable();

    for &line in old {
        match next.peek() {
            Some(&&candidate) if line == candidate => {
                ops.push(Op::Keep(line));
                next.next();
            }
            Some(&&candidate) if line.trim_end() == candidate => {
                ops.push(Op::Replace(line, candidate));
                next.next();
            }
            _ => ops.push(Op::Delete(line)),
        }
    }
    ops.extend(next.map(|&line| Op::Insert(line)));
    ops
}

/// Renders a unified-style diff. Returns an empty string when nothing changed.
#[must_use]
pub fn render(label: &str, original: &str, rewritten: &str) -> String {
    let old: Vec<&str> = original.lines().collect();
    let new: Vec<&str> = rewritten.lines().collect();
    let ops = align(&old, &new);
    if !ops.iter().any(|op| op.is_change()) {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "--- {label}:before");
    let _ = writeln!(out, "+++ {label}:after");
    for (start, end) in hunks(&ops) {
        write_hunk(&mut out, &ops, start, end);
    }
    out
}

/// Half-open op ranges, each covering a run of changes plus context.
fn hunks(ops: &[Op]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (index, op) in ops.iter().enumerate() {
        if !op.is_change() {
            continue;
        }
        let start = index.saturating_sub(CONTEXT);
        let end = (index + 1 + CONTEXT).min(ops.len());
        match ranges.last_mut() {
            Some(last) if start <= last.1 => last.1 = end,
            _ => ranges.push((start, end)),
        }
    }
    ranges
}

fn write_hunk(out: &mut String, ops: &[Op], start: usize, end: usize) {
    let old_start = 1 + ops[..start].iter().map(|op| op.old_len()).sum::<usize>();
    let new_start = 1 + ops[..start].iter().map(|op| op.new_len()).sum::<usize>();
    let old_len: usize = ops[start..end].iter().map(|op| op.old_len()).sum();
    let new_len: usize = ops[start..end].iter().map(|op| op.new_len()).sum();
    let _ = writeln!(out, "@@ -{old_start},{old_len} +{new_start},{new_len} @@");

    for op in &ops[start..end] {
        let _ = match *op {
            Op::Keep(line) => writeln!(out, " {line}"),
            Op::Delete(line) => writeln!(out, "-{line}"),
            Op::Insert(line) => writeln!(out, "+{line}"),
            Op::Replace(before, after) => writeln!(out, "-{before}\n+{after}"),
        };
    }
}
