//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the parse error type, helper methods, and the top-level entry
//! point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, token helpers, error recovery
//! - `expressions`: one method per grammar level, lowest precedence first
//!
//! # Error Recovery
//!
//! Grammar methods return `Result<Expr, ParseError>` and propagate failures
//! with `?`. Only [`Parser::parse`] turns a [`ParseError`] into a diagnostic,
//! so every failed parse reports exactly once and yields no partial tree.

use crate::diagnostics::Diagnostics;
use crate::parser::ast::Expr;
use crate::parser::token::{Token, TokenKind};
use thiserror::Error;
use tracing::debug;

/// Parser error type
///
/// Carries the offending token so the diagnostic can point at it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self {
            token,
            message: message.into(),
        }
    }
}

/// Deepest expression tree the parser will build.
///
/// Counts nested groupings, prefix operators and binary operators in a
/// chain. Past this the parse fails with a diagnostic instead of
/// exhausting the stack.
pub const MAX_DEPTH: usize = 256;

/// Keywords that begin a statement; recovery stops in front of them.
const STATEMENT_KEYWORDS: &[TokenKind] = &[
    TokenKind::Class,
    TokenKind::Fun,
    TokenKind::Var,
    TokenKind::For,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Print,
    TokenKind::Return,
];

/// Recursive descent parser for Lox expressions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Depth of the tree node currently being built
    pub(crate) depth: usize,
}

impl Parser {
    /// Create a parser over a scanned token sequence.
    ///
    /// An EOF token is appended if the sequence does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parse one expression.
    ///
    /// Returns `None` after reporting exactly one diagnostic if the tokens do
    /// not form an expression.
    pub fn parse(&mut self, diagnostics: &mut Diagnostics) -> Option<Expr> {
        self.depth = 0;
        match self.parse_expression() {
            Ok(expr) => {
                debug!(consumed = self.position, "parse succeeded");
                Some(expr)
            }
            Err(err) => {
                debug!(line = err.token.line, message = %err.message, "parse failed");
                diagnostics.error_at_token(&err.token, err.message);
                None
            }
        }
    }

    /// Discard tokens until a likely statement boundary.
    ///
    /// Stops just after a `;`, just before a statement keyword, or at EOF.
    /// The offending token is always discarded first.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            if STATEMENT_KEYWORDS.contains(&self.peek().kind) {
                return;
            }

            self.advance();
        }
    }

    /// Tokens not yet consumed, including the trailing EOF.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position..]
    }

    // ===== Helper methods =====

    /// Consume the current token if it is any of `kinds`.
    pub(crate) fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Most recently consumed token (the current one before anything is consumed).
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Go one level deeper, failing once [`MAX_DEPTH`] is reached.
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_at_current("Too much nesting."));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn error_at_current(&self, message: &str) -> ParseError {
        ParseError::new(self.peek().clone(), message)
    }
}
