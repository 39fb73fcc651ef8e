//! Lox source code parser
//!
//! This module transforms Lox source text into an expression tree:
//! - [`token`]: Token model shared by lexer and parser
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, helpers and error recovery
//! - [`ast`]: Expression node definitions and the [`ast::ExprVisitor`] traversal trait
//!
//! # Supported Grammar
//!
//! Expressions only: literals (numbers, strings, `true`, `false`, `nil`),
//! grouping, prefix `!` and `-`, and the binary arithmetic, comparison and
//! equality operators. No statements, variables, or control flow yet.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per precedence level.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod token;
