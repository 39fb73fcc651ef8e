//! Compile-error reporting
//!
//! The lexer and parser never print anything themselves. They push
//! [`Diagnostic`]s into a [`Diagnostics`] collector owned by the caller, one
//! collector per compilation unit. The caller decides when and how to show
//! them and consults [`Diagnostics::had_error`] before trusting a parsed tree.
//!
//! - [`errors`]: diagnostic and driver error types
//! - [`constants`]: process exit codes

pub mod constants;
pub mod errors;

pub use errors::{Diagnostic, DriverError};

use crate::parser::token::Token;
use tracing::debug;

/// Ordered collection of the diagnostics reported during one compilation.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic with an explicit context string.
    pub fn report(
        &mut self,
        line: usize,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Diagnostic::new(line, context, message));
    }

    pub fn error_at_line(&mut self, line: usize, message: impl Into<String>) {
        self.push(Diagnostic::at_line(line, message));
    }

    pub fn error_at_token(&mut self, token: &Token, message: impl Into<String>) {
        self.push(Diagnostic::at_token(token, message));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "compile error reported");
        self.entries.push(diagnostic);
    }

    /// Whether any compile error has been reported since the last [`clear`](Self::clear).
    pub fn had_error(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Forget everything reported so far (used between REPL lines).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
