// src/analysis/checks.rs
//! Line and syntax-tree detectors.

mod comments;
mod duplicates;
mod exceptions;
mod naming;
mod nesting;
mod size;

use crate::config::RuleConfig;
use crate::lang::Dialect;

pub use comments::{check_low_signal_comments, check_todo_markers};
pub use duplicates::check_duplicate_blocks;
pub use exceptions::check_broad_exceptions;
pub use naming::check_generic_names;
pub use nesting::check_nesting;
pub use size::{check_large_file, check_long_functions};

/// Context for running checks on a single file.
pub struct CheckContext<'a> {
    pub lines: &'a [&'a str],
    pub source: &'a str,
    pub dialect: Dialect,
    pub config: &'a RuleConfig,
}
