//! # Introduction
//!
//! `lox_syntax` is the front end of a tree-walking Lox implementation. It
//! turns source text into an expression tree that downstream evaluators or
//! analysers consume through the [`parser::ast::ExprVisitor`] trait.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Expr → (AstPrinter | evaluator)
//! ```
//!
//! 1. [`parser`] — scans the source into tokens and parses one expression.
//! 2. [`printer`] — renders a tree as `(op left right)`; a debugging and test oracle.
//! 3. [`diagnostics`] — the per-compilation error collector and exit codes.
//! 4. [`driver`] — the compile pipeline plus the file/prompt session used by `rlox`.
//! 5. [`config`] — command-line options of the `rlox` binary.
//!
//! ## Example
//!
//! ```
//! use lox_syntax::driver::compile;
//! use lox_syntax::printer::AstPrinter;
//!
//! let compilation = compile("(1 + 2) * 3");
//! let tree = compilation.tree().expect("no errors");
//! assert_eq!(AstPrinter::new().print(tree), "(* (group (+ 1 2)) 3)");
//! ```
//!
//! ## Error reporting
//!
//! Lexical errors are reported per character and scanning continues. A syntax
//! error abandons the parse after exactly one diagnostic. Nothing is printed
//! by the library: diagnostics are collected in [`diagnostics::Diagnostics`]
//! and it is up to the caller to show them and check
//! [`Diagnostics::had_error`](diagnostics::Diagnostics::had_error) before
//! trusting a tree.

pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod parser;
pub mod printer;
