// src/config/io.rs
use std::fs;
use std::path::Path;

use super::Config;
use crate::error::{DeslopError, Result};

/// Reads and parses a config file. A missing file yields `None`.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| DeslopError::io(e, path))?;
    parse_toml(&content, path).map(Some)
}

/// Parses config text. `origin` names the source in error messages.
///
/// # Errors
/// Returns `DeslopError::Config` on malformed TOML or unknown keys.
pub fn parse_toml(content: &str, origin: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|e| DeslopError::Config {
        path: origin.to_path_buf(),
        message: e.message().to_string(),
    })
}
