//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers::{handle_rewrite, handle_scan};
use crate::exit::DeslopExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<DeslopExit> {
    match command {
        Commands::Scan {
            target,
            json,
            fail_on,
        } => handle_scan(&target, json, fail_on),
        Commands::Rewrite {
            target,
            apply,
            diff,
        } => handle_rewrite(&target, apply, diff),
    }
}
