// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::rules::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};

/// Detector thresholds, read from `[rules]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default = "default_max_indent_depth")]
    pub max_indent_depth: usize,
    #[serde(default = "default_max_brace_depth")]
    pub max_brace_depth: usize,
    #[serde(default = "default_duplicate_window")]
    pub duplicate_window: usize,
    #[serde(default = "default_max_duplicate_findings")]
    pub max_duplicate_findings: usize,
    #[serde(default = "default_max_function_lines")]
    pub max_function_lines: usize,
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,
    #[serde(default = "default_max_blank_run")]
    pub max_blank_run: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_indent_depth: default_max_indent_depth(),
            max_brace_depth: default_max_brace_depth(),
            duplicate_window: default_duplicate_window(),
            max_duplicate_findings: default_max_duplicate_findings(),
            max_function_lines: default_max_function_lines(),
            max_file_lines: default_max_file_lines(),
            max_blank_run: default_max_blank_run(),
        }
    }
}

fn default_max_indent_depth() -> usize { 4 }
fn default_max_brace_depth() -> usize { 5 }
fn default_duplicate_window() -> usize { 4 }
fn default_max_duplicate_findings() -> usize { 1 }
fn default_max_function_lines() -> usize { 80 }
fn default_max_file_lines() -> usize { 700 }
fn default_max_blank_run() -> usize { 2 }

/// File selection, read from `[scan]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub include_tests: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            include_tests: false,
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| (*s).to_string()).collect()
}

/// Contents of `deslop.toml`. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}
