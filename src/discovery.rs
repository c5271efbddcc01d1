// src/discovery.rs
use crate::config::ScanConfig;
use crate::error::{DeslopError, Result};
use crate::file_class::{self, FileKind};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files selected for processing plus the input paths that did not exist.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

/// Decoded file contents. `lossy` is set when invalid UTF-8 was replaced.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub text: String,
    pub lossy: bool,
}

/// Resolves files and directories into a sorted, duplicate-free file list.
///
/// Explicit files are kept when their extension matches, they sit under no
/// excluded directory, and (unless tests are included) they do not look like
/// tests. Directories are walked with excluded directories pruned.
#[must_use]
pub fn discover(paths: &[PathBuf], config: &ScanConfig) -> Discovery {
    let mut found = BTreeSet::new();
    let mut missing = Vec::new();

    for path in paths {
        if path.is_file() {
            if accepts(path, path, config) {
                found.insert(path.clone());
            }
        } else if path.is_dir() {
            found.extend(walk_directory(path, config));
        } else {
            tracing::warn!(path = %path.display(), "path does not exist");
            missing.push(path.clone());
        }
    }

    Discovery {
        files: found.into_iter().collect(),
        missing,
    }
}

fn walk_directory(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e, config));

    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
                if accepts(entry.path(), relative, config) {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                errors += 1;
                tracing::debug!(error = %e, "walk entry skipped");
            }
        }
    }
    if errors > 0 {
        tracing::warn!(root = %root.display(), errors, "encountered errors during file walk");
    }
    paths
}

fn is_excluded_dir(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry.file_type().is_dir()
        && config
            .excluded_dirs
            .iter()
            .any(|dir| entry.file_name().to_string_lossy() == dir.as_str())
}

/// `relative` is the path below the walk root; test directories are judged on it.
fn accepts(path: &Path, relative: &Path, config: &ScanConfig) -> bool {
    if !has_scanned_extension(path, &config.extensions) {
        return false;
    }
    if file_class::has_excluded_dir(relative, &config.excluded_dirs) {
        return false;
    }
    config.include_tests || file_class::classify(relative) != FileKind::Test
}

fn has_scanned_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let dotted = format!(".{}", ext.to_ascii_lowercase());
    extensions.iter().any(|e| e.eq_ignore_ascii_case(&dotted))
}

/// Reads a file, replacing invalid UTF-8 instead of failing.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn read_source(path: &Path) -> Result<SourceText> {
    let bytes = fs::read(path).map_err(|e| DeslopError::io(e, path))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => SourceText { text, lossy: false },
        Err(e) => {
            tracing::debug!(path = %path.display(), "invalid UTF-8 decoded lossily");
            SourceText {
                text: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                lossy: true,
            }
        }
    })
}
