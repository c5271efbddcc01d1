// src/reporting/json.rs
use anyhow::Result;
use serde::Serialize;

use crate::types::{FileReport, ScanReport};

/// Machine-readable scan output. Only flagged files are listed.
#[derive(Debug, Serialize)]
pub struct ScanPayload<'a> {
    pub file_count: usize,
    pub flagged_file_count: usize,
    pub reports: Vec<&'a FileReport>,
}

impl<'a> ScanPayload<'a> {
    #[must_use]
    pub fn from_report(report: &'a ScanReport) -> Self {
        let reports: Vec<&FileReport> = report.flagged().collect();
        Self {
            file_count: report.file_count(),
            flagged_file_count: reports.len(),
            reports,
        }
    }
}

/// Renders the payload as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ScanPayload::from_report(report))?)
}

/// Prints the payload to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &ScanReport) -> Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}
