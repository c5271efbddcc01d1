// src/reporting/console.rs
//! Human-readable scan output.

use std::fmt::Write;

use colored::Colorize;

use crate::analysis::scoring;
use crate::types::{FileReport, Issue, ScanReport, Severity};

/// Prints the scan summary followed by every flagged file.
pub fn print_report(report: &ScanReport) {
    print!("{}", render_summary(report));
    for file in report.flagged() {
        print_file(file);
    }
    print_errors(report);
}

/// Counts block: scanned, flagged, and per-severity totals (highest first).
#[must_use]
pub fn render_summary(report: &ScanReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scanned files: {}", report.file_count());
    let _ = writeln!(out, "Flagged files: {}", report.flagged_count());

    let totals = scoring::summarize_reports(report.flagged());
    if !totals.is_empty() {
        let summary: Vec<String> = totals
            .iter()
            .rev()
            .map(|(severity, count)| format!("{severity}={count}"))
            .collect();
        let _ = writeln!(out, "Issues by severity: {}", summary.join(", "));
    }
    out.push('\n');
    out
}

fn print_file(file: &FileReport) {
    let score = format!("slop_score={}", file.score());
    let score = match file.score() {
        0..=24 => score.normal(),
        25..=59 => score.yellow(),
        _ => score.red().bold(),
    };
    println!("{}  {score}", file.path().display());
    for issue in file.issues() {
        println!("{}", colorize(issue, &format_issue(issue)));
    }
    println!();
}

/// One issue line: `  - [SEVERITY] CODE (line N): message | Suggestion: ...`.
#[must_use]
pub fn format_issue(issue: &Issue) -> String {
    let line = issue
        .line
        .map_or_else(|| "line ?".to_string(), |n| format!("line {n}"));
    let mut text = format!(
        "  - [{}] {} ({line}): {}",
        issue.severity.label().to_uppercase(),
        issue.code,
        issue.message
    );
    if let Some(suggestion) = &issue.suggestion {
        let _ = write!(text, " | Suggestion: {suggestion}");
    }
    text
}

fn colorize(issue: &Issue, text: &str) -> colored::ColoredString {
    match issue.severity {
        Severity::Critical | Severity::High => text.red(),
        Severity::Medium => text.yellow(),
        Severity::Low => text.dimmed(),
    }
}

fn print_errors(report: &ScanReport) {
    for error in &report.errors {
        eprintln!(
            "{} {}: {}",
            "error:".red().bold(),
            error.path.display(),
            error.message
        );
    }
}
