// src/cli/handlers.rs
use anyhow::Result;
use colored::Colorize;

use crate::analysis::{scoring, Engine};
use crate::cli::args::{FailOn, TargetArgs};
use crate::config::Config;
use crate::discovery;
use crate::error::DeslopError;
use crate::exit::DeslopExit;
use crate::logging;
use crate::reporting;

/// Handles the scan command.
///
/// # Errors
/// Returns error if rendering the report fails.
pub fn handle_scan(target: &TargetArgs, json: bool, fail_on: FailOn) -> Result<DeslopExit> {
    let engine = match prepare(target) {
        Ok(engine) => engine,
        Err(exit) => return Ok(exit),
    };

    let found = discovery::discover(&target.paths, &engine.config().scan);
    report_missing(&found.missing);
    let report = engine.scan(&found.files);
    tracing::debug!(
        files = report.file_count(),
        issues = report.total_issues,
        ms = report.duration_ms,
        "scan finished"
    );

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report);
    }

    let failed = fail_on
        .threshold()
        .is_some_and(|threshold| scoring::has_severity_at_or_above(report.flagged(), threshold));
    if failed {
        return Ok(DeslopExit::Findings);
    }
    Ok(run_status(found.missing.is_empty() && report.errors.is_empty()))
}

/// Handles the rewrite command.
///
/// # Errors
/// Currently infallible once the config is accepted.
pub fn handle_rewrite(target: &TargetArgs, apply: bool, diff: bool) -> Result<DeslopExit> {
    let engine = match prepare(target) {
        Ok(engine) => engine,
        Err(exit) => return Ok(exit),
    };

    let found = discovery::discover(&target.paths, &engine.config().scan);
    report_missing(&found.missing);
    let report = engine.rewrite(&found.files, apply);
    tracing::debug!(
        files = report.results.len(),
        changes = report.total_changes(),
        applied = apply,
        "rewrite finished"
    );

    reporting::print_rewrites(&report, diff);
    Ok(run_status(found.missing.is_empty() && report.errors.is_empty()))
}

/// Initializes logging and loads config. An invalid config stops the run
/// before any file is touched.
fn prepare(target: &TargetArgs) -> std::result::Result<Engine, DeslopExit> {
    logging::init(target.verbose);

    let mut config = match Config::load(target.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return Err(config_failure(&e)),
    };
    config.override_extensions(&target.extensions);
    if target.include_tests {
        config.scan.include_tests = true;
    }
    if let Err(e) = config.validate() {
        return Err(config_failure(&e));
    }
    Ok(Engine::new(config))
}

fn config_failure(e: &DeslopError) -> DeslopExit {
    eprintln!("{} {e}", "error:".red().bold());
    if e.is_config() {
        DeslopExit::InvalidConfig
    } else {
        DeslopExit::Error
    }
}

fn report_missing(missing: &[std::path::PathBuf]) {
    for path in missing {
        eprintln!("{} {}: path not found", "error:".red().bold(), path.display());
    }
}

fn run_status(clean: bool) -> DeslopExit {
    if clean {
        DeslopExit::Success
    } else {
        DeslopExit::Error
    }
}
