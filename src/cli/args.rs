// src/cli/args.rs
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::types::Severity;

#[derive(Parser)]
#[command(
    name = "deslop",
    version,
    about = "Detect and reduce AI-slop code patterns with safe rewrites"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze source files and score slop risk
    Scan {
        #[command(flatten)]
        target: TargetArgs,
        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
        /// Exit with code 2 if any issue is at or above this severity
        #[arg(long, value_enum, default_value_t = FailOn::None)]
        fail_on: FailOn,
    },
    /// Preview or apply safe rewrites
    Rewrite {
        #[command(flatten)]
        target: TargetArgs,
        /// Write safe rewrites to disk
        #[arg(long)]
        apply: bool,
        /// Print a diff for each changed file
        #[arg(long)]
        diff: bool,
    },
}

/// File selection and config flags shared by every command.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// File or directory paths
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
    /// Override the extension set, e.g. --extensions .py .ts
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub extensions: Vec<String>,
    /// Include test files (excluded by default)
    #[arg(long)]
    pub include_tests: bool,
    /// Config file (default: ./deslop.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl FailOn {
    /// Minimum severity that fails the run; `None` never fails.
    #[must_use]
    pub fn threshold(self) -> Option<Severity> {
        match self {
            Self::None => None,
            Self::Low => Some(Severity::Low),
            Self::Medium => Some(Severity::Medium),
            Self::High => Some(Severity::High),
            Self::Critical => Some(Severity::Critical),
        }
    }
}
