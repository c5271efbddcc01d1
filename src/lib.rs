//! Heuristic detection of low-signal code patterns plus behavior-preserving
//! line rewrites.

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod file_class;
pub mod lang;
pub mod logging;
pub mod reporting;
pub mod rewrite;
pub mod rules;
pub mod types;

pub use analysis::{analyze, analyze_with, Engine};
pub use rewrite::{rewrite, rewrite_with};
