// src/analysis/scoring.rs
//! Slop score and severity summaries.

use std::collections::BTreeMap;

use crate::rules::{MAX_SCORE, SCORED_ISSUE_LIMIT};
use crate::types::{FileReport, Issue, Severity};

/// Weighted sum over the first [`SCORED_ISSUE_LIMIT`] issues, capped at [`MAX_SCORE`].
#[must_use]
pub fn calculate_score(issues: &[Issue]) -> u32 {
    let raw: u32 = issues
        .iter()
        .take(SCORED_ISSUE_LIMIT)
        .map(|issue| issue.severity.weight())
        .sum();
    raw.min(MAX_SCORE)
}

/// Issue counts keyed by severity.
#[must_use]
pub fn summarize_severity(issues: &[Issue]) -> BTreeMap<Severity, usize> {
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.severity).or_insert(0) += 1;
    }
    counts
}

/// Severity totals across many reports.
#[must_use]
pub fn summarize_reports<'a, I>(reports: I) -> BTreeMap<Severity, usize>
where
    I: IntoIterator<Item = &'a FileReport>,
{
    let mut totals = BTreeMap::new();
    for report in reports {
        for (severity, count) in summarize_severity(report.issues()) {
            *totals.entry(severity).or_insert(0) += count;
        }
    }
    totals
}

/// True when any report holds an issue at or above `threshold`.
#[must_use]
pub fn has_severity_at_or_above<'a, I>(reports: I, threshold: Severity) -> bool
where
    I: IntoIterator<Item = &'a FileReport>,
{
    reports
        .into_iter()
        .flat_map(FileReport::issues)
        .any(|issue| issue.severity >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssueCode;

    fn issue(severity: Severity) -> Issue {
        Issue::at(IssueCode::TodoMarker, severity, 1, "x")
    }

    #[test]
    fn empty_scores_zero() {
        assert_eq!(calculate_score(&[]), 0);
    }

    #[test]
    fn weights_sum() {
        let issues = vec![issue(Severity::High), issue(Severity::Medium), issue(Severity::Low)];
        assert_eq!(calculate_score(&issues), 27);
    }

    #[test]
    fn score_caps_at_hundred() {
        let issues = vec![issue(Severity::Critical); 5];
        assert_eq!(calculate_score(&issues), 100);
    }

    #[test]
    fn only_first_twenty_count() {
        let mut issues = vec![issue(Severity::Low); 20];
        assert_eq!(calculate_score(&issues), 80);
        issues.push(issue(Severity::Critical));
        assert_eq!(calculate_score(&issues), 80);
    }

    #[test]
    fn summary_counts() {
        let issues = vec![issue(Severity::Low), issue(Severity::Low), issue(Severity::High)];
        let summary = summarize_severity(&issues);
        assert_eq!(summary.get(&Severity::Low), Some(&2));
        assert_eq!(summary.get(&Severity::High), Some(&1));
        assert_eq!(summary.get(&Severity::Medium), None);
    }

    #[test]
    fn threshold_check() {
        let reports = vec![FileReport::new("a.py", vec![issue(Severity::Medium)])];
        assert!(has_severity_at_or_above(&reports, Severity::Low));
        assert!(has_severity_at_or_above(&reports, Severity::Medium));
        assert!(!has_severity_at_or_above(&reports, Severity::High));
    }
}
