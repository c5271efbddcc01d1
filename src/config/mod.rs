// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, RuleConfig, ScanConfig};

use std::path::{Path, PathBuf};

use crate::error::{DeslopError, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "deslop.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `explicit`, or `deslop.toml` from the working directory.
    ///
    /// A missing default file yields defaults. A missing explicit file is an error.
    ///
    /// # Errors
    /// Returns `DeslopError::Config` if the file is unreadable, malformed, or invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), Path::to_path_buf);

        let config = match io::load_toml_config(&path)? {
            Some(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            None if explicit.is_some() => {
                return Err(DeslopError::Config {
                    path,
                    message: "file not found".to_string(),
                });
            }
            None => Self::default(),
        };

        config.validate_at(&path)?;
        Ok(config)
    }

    /// Validates thresholds and extensions.
    ///
    /// # Errors
    /// Returns `DeslopError::Config` naming the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(Path::new(CONFIG_FILE_NAME))
    }

    fn validate_at(&self, path: &Path) -> Result<()> {
        let invalid = |message: String| DeslopError::Config {
            path: path.to_path_buf(),
            message,
        };

        let rules = &self.rules;
        if rules.duplicate_window < 2 {
            return Err(invalid(format!(
                "rules.duplicate_window must be at least 2 (got {})",
                rules.duplicate_window
            )));
        }
        let limits = [
            ("max_indent_depth", rules.max_indent_depth),
            ("max_brace_depth", rules.max_brace_depth),
            ("max_duplicate_findings", rules.max_duplicate_findings),
            ("max_function_lines", rules.max_function_lines),
            ("max_file_lines", rules.max_file_lines),
            ("max_blank_run", rules.max_blank_run),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == 0) {
            return Err(invalid(format!("rules.{name} must be greater than 0")));
        }

        if let Some(ext) = self.scan.extensions.iter().find(|e| !is_valid_extension(e)) {
            return Err(invalid(format!(
                "scan.extensions entry '{ext}' must start with '.'"
            )));
        }
        Ok(())
    }

    /// Replaces the extension list with CLI values, adding a missing leading dot.
    pub fn override_extensions(&mut self, extensions: &[String]) {
        if extensions.is_empty() {
            return;
        }
        self.scan.extensions = extensions.iter().map(|e| normalize_extension(e)).collect();
    }
}

fn is_valid_extension(ext: &str) -> bool {
    ext.len() > 1 && ext.starts_with('.')
}

/// `py` and `.PY` both become `.py`.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}
