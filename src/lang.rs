// src/lang.rs
//! Source dialects and the detector capabilities each one supports.
//!
//! The engines never branch on extension strings; they ask the dialect.

use regex::Regex;
use std::path::Path;
use tree_sitter::Language;

use crate::rules::{JS_FUNC_RE, PY_DEF_RE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Indentation-significant, with a full grammar (Python).
    Python,
    /// Brace-delimited with recognizable function declarations (JS/TS).
    EcmaScript,
    /// Brace-delimited, heuristics only (Java, Go, Rust, C family, C#).
    Braced,
    /// Anything else: only the language-neutral detectors run.
    Plain,
}

/// How nesting depth is estimated for a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingStyle {
    Indentation,
    Braces,
    Unchecked,
}

impl Dialect {
    /// Maps a file extension (with or without the leading dot) to a dialect.
    #[must_use]
    pub fn from_ext(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "py" => Self::Python,
            "js" | "jsx" | "ts" | "tsx" => Self::EcmaScript,
            "java" | "go" | "rs" | "c" | "cc" | "cpp" | "cs" => Self::Braced,
            _ => Self::Plain,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Self::Plain, Self::from_ext)
    }

    /// Signature pattern used by the generic-name detector, if any.
    #[must_use]
    pub fn definition_pattern(self) -> Option<&'static Regex> {
        match self {
            Self::Python => Some(&*PY_DEF_RE),
            Self::EcmaScript => Some(&*JS_FUNC_RE),
            Self::Braced | Self::Plain => None,
        }
    }

    #[must_use]
    pub fn detects_generic_names(self) -> bool {
        self.definition_pattern().is_some()
    }

    #[must_use]
    pub fn detects_broad_exceptions(self) -> bool {
        self == Self::Python
    }

    #[must_use]
    pub fn nesting(self) -> NestingStyle {
        match self {
            Self::Python => NestingStyle::Indentation,
            Self::EcmaScript | Self::Braced => NestingStyle::Braces,
            Self::Plain => NestingStyle::Unchecked,
        }
    }

    #[must_use]
    pub fn supports_grammar(self) -> bool {
        self.grammar().is_some()
    }

    #[must_use]
    pub fn grammar(self) -> Option<Language> {
        match self {
            Self::Python => Some(tree_sitter_python::language()),
            Self::EcmaScript | Self::Braced | Self::Plain => None,
        }
    }

    /// Single-line comment prefixes the rewriter may treat as removable lines.
    #[must_use]
    pub fn comment_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Python => &["#"],
            Self::EcmaScript | Self::Braced => &["//"],
            Self::Plain => &["#", "//"],
        }
    }
}
