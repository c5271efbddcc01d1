// src/rewrite/writer.rs
use std::fs;
use std::path::Path;

use crate::error::{DeslopError, Result};

/// Overwrites an existing file in place, keeping its permissions.
///
/// # Errors
/// Returns error if the file is missing or the write fails.
pub fn write_back(path: &Path, content: &str) -> Result<()> {
    if !path.is_file() {
        return Err(DeslopError::Other(format!(
            "refusing to create {}: rewrite targets must already exist",
            path.display()
        )));
    }
    fs::write(path, content).map_err(|e| DeslopError::io(e, path))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "rewrite applied");
    Ok(())
}
