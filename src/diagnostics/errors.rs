//! Error types reported outside the parser
//!
//! [`Diagnostic`] is a compile-time problem found in Lox source (lexical or
//! syntactic). [`DriverError`] covers failures of the hosting driver itself,
//! which are not problems with the user's program.

use crate::parser::token::Token;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One reported compile error.
///
/// Renders as `[line L] Error<context>: message`. Diagnostics carry a line
/// number only, never a column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{context}: {message}")]
pub struct Diagnostic {
    pub line: usize,
    /// Either empty, `" at end"`, or `" at '<lexeme>'"`.
    pub context: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        line: usize,
        context: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            context: context.into(),
            message: message.into(),
        }
    }

    /// A diagnostic tied to a line but not to any particular token.
    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self::new(line, "", message)
    }

    /// A diagnostic pointing at an offending token.
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        let context = if token.is_eof() {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };
        Self::new(token.line, context, message)
    }
}

/// Failures of the file/REPL driver.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read script '{}': {}", .path.display(), .source)]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
