// src/reporting/rewrite.rs
use colored::Colorize;

use super::diff;
use crate::types::{RewriteReport, RewriteResult};

/// Status line for one changed file.
#[must_use]
pub fn format_status(result: &RewriteResult, applied: bool) -> String {
    let mode = if applied { "applied" } else { "preview" };
    format!(
        "[{mode}] {} ({} safe changes)",
        result.path().display(),
        result.change_count()
    )
}

/// Prints a status line (and optionally a diff) per changed file.
pub fn print_rewrites(report: &RewriteReport, show_diff: bool) {
    let mut any = false;
    for result in report.changed() {
        any = true;
        let status = format_status(result, report.applied);
        if report.applied {
            println!("{}", status.green());
        } else {
            println!("{}", status.cyan());
        }
        if show_diff {
            let label = result.path().display().to_string();
            print_diff(&diff::render(&label, result.original(), result.rewritten()));
        }
    }
    if !any {
        println!("No safe rewrites were necessary.");
    }

    for error in &report.errors {
        eprintln!(
            "{} {}: {}",
            "error:".red().bold(),
            error.path.display(),
            error.message
        );
    }
}

fn print_diff(text: &str) {
    for line in text.lines() {
        if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}
