// src/analysis/ast.rs
//! Grammar-backed views of a source file.
//!
//! Parsing never fails loudly: a dialect without a grammar, a parser that
//! gives up, or a tree containing syntax errors all produce
//! [`ParseOutcome::Unavailable`]. Callers treat that as "no information".

use tree_sitter::{Node, Parser, Point, Tree};

use crate::lang::Dialect;

/// Result of attempting to parse a file.
pub enum ParseOutcome {
    Parsed(SyntaxTree),
    Unavailable,
}

impl ParseOutcome {
    #[must_use]
    pub fn tree(&self) -> Option<&SyntaxTree> {
        match self {
            Self::Parsed(tree) => Some(tree),
            Self::Unavailable => None,
        }
    }
}

/// A function definition and its 1-based inclusive line span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl FunctionSpan {
    #[must_use]
    pub fn len(&self) -> usize {
        (self.end_line + 1).saturating_sub(self.start_line)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A comment token that is the only thing on its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneComment {
    /// 0-based row.
    pub row: usize,
    pub text: String,
}

pub struct SyntaxTree {
    tree: Tree,
}

impl SyntaxTree {
    /// Parses `source` with the dialect's grammar.
    #[must_use]
    pub fn parse(source: &str, dialect: Dialect) -> ParseOutcome {
        let Some(grammar) = dialect.grammar() else {
            return ParseOutcome::Unavailable;
        };

        let mut parser = Parser::new();
        if parser.set_language(grammar).is_err() {
            tracing::debug!(?dialect, "grammar rejected by parser");
            return ParseOutcome::Unavailable;
        }

        let Some(tree) = parser.parse(source, None) else {
            tracing::debug!(?dialect, "parser returned no tree");
            return ParseOutcome::Unavailable;
        };

        if tree.root_node().has_error() {
            tracing::debug!(?dialect, "source has syntax errors; grammar checks disabled");
            return ParseOutcome::Unavailable;
        }

        ParseOutcome::Parsed(Self { tree })
    }

    /// Every function definition (sync or async), in source order.
    #[must_use]
    pub fn function_spans(&self, source: &str) -> Vec<FunctionSpan> {
        let mut spans = Vec::new();
        walk(&self.tree, |node| {
            if node.kind() == "function_definition" {
                spans.push(span_of(node, source));
            }
        });
        spans
    }

    /// Comment tokens preceded only by whitespace on their line.
    #[must_use]
    pub fn standalone_comments(&self, source: &str) -> Vec<StandaloneComment> {
        let lines: Vec<&str> = source.split('\n').collect();
        let mut found = Vec::new();
        walk(&self.tree, |node| {
            if node.kind() != "comment" {
                return;
            }
            let start = node.start_position();
            let leads_line = lines
                .get(start.row)
                .and_then(|line| line.get(..start.column))
                .is_some_and(|prefix| prefix.trim().is_empty());
            if !leads_line {
                return;
            }
            if let Ok(text) = node.utf8_text(source.as_bytes()) {
                found.push(StandaloneComment {
                    row: start.row,
                    text: text.to_string(),
                });
            }
        });
        found
    }
}

fn span_of(node: Node, source: &str) -> FunctionSpan {
    let name = node
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
        .unwrap_or("<anonymous>")
        .to_string();

    let start_line = node.start_position().row + 1;
    let end = last_code_end(node);
    // A node ending at column 0 closed on the previous line.
    let end_row = if end.column == 0 && end.row > node.start_position().row {
        end.row - 1
    } else {
        end.row
    };

    FunctionSpan {
        name,
        start_line,
        end_line: end_row + 1,
    }
}

/// End of the last non-comment token under `node`. Comments trailing a body
/// are not part of the function.
fn last_code_end(node: Node) -> Point {
    let mut current = node;
    loop {
        let next = (0..current.child_count())
            .rev()
            .filter_map(|i| current.child(i))
            .find(|child| child.kind() != "comment");
        match next {
            Some(child) => current = child,
            None => return current.end_position(),
        }
    }
}

/// Pre-order traversal without recursion; deeply nested files cannot blow the stack.
fn walk<'t, F: FnMut(Node<'t>)>(tree: &'t Tree, mut visit: F) {
    let mut cursor = tree.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
