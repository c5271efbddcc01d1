// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeslopError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeslopError>;

impl DeslopError {
    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// Returns true for errors that invalidate the whole run rather than one path.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_config_errors_stop_the_run() {
        let config = DeslopError::Config {
            path: PathBuf::from("deslop.toml"),
            message: "bad".into(),
        };
        let io = DeslopError::io(std::io::Error::other("gone"), "a.py");
        assert!(config.is_config());
        assert!(!io.is_config());
        assert!(io.to_string().contains("a.py"));
    }
}
