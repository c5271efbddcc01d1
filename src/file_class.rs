// src/file_class.rs
//! File classification: separates production sources from test files.
//!
//! Test files are skipped by default. The decision looks only at the path,
//! never at contents.

use std::path::{Component, Path};

use crate::rules::TEST_DIRS;

/// Classification of a file for scanning purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Production code. Always scanned.
    Source,
    /// Test code. Scanned only with `--include-tests`.
    Test,
}

/// Classifies a path (relative to the walk root where one exists).
///
/// Decision order:
/// 1. File name: `test_` prefix, `_test` stem suffix, `.test.` / `.spec.` infix
/// 2. Any parent directory named `test`, `tests` or `__tests__`
#[must_use]
pub fn classify(path: &Path) -> FileKind {
    if has_test_name(path) || has_test_dir(path) {
        FileKind::Test
    } else {
        FileKind::Source
    }
}

fn has_test_name(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let stem = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    name.starts_with("test_")
        || stem.ends_with("_test")
        || name.contains(".test.")
        || name.contains(".spec.")
}

fn has_test_dir(path: &Path) -> bool {
    dir_names(path).any(|dir| TEST_DIRS.iter().any(|t| dir.eq_ignore_ascii_case(t)))
}

/// Returns true if any parent directory matches one of `excluded` exactly.
#[must_use]
pub fn has_excluded_dir(path: &Path, excluded: &[String]) -> bool {
    dir_names(path).any(|dir| excluded.iter().any(|e| e == dir))
}

/// Normal directory components, excluding the file name itself.
fn dir_names(path: &Path) -> impl Iterator<Item = &str> {
    path.parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
}
