//! Compilation pipeline and the file/prompt session around it
//!
//! [`compile`] runs one full scan followed by one parse, giving each
//! compilation its own [`Diagnostics`]. [`Session`] is what the `rlox` binary
//! drives: it writes diagnostics and results to caller-supplied streams so it
//! can be exercised with in-memory buffers.

use crate::config::EmitMode;
use crate::diagnostics::{Diagnostic, Diagnostics, DriverError};
use crate::parser::ast::Expr;
use crate::parser::lexer::scan;
use crate::parser::parse::Parser;
use crate::parser::token::Token;
use crate::printer::AstPrinter;
use crossterm::style::Stylize;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Everything produced by compiling one source text.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    /// The parsed tree. May be present even when lexical errors were
    /// reported; use [`Compilation::tree`] to get it only when it can be trusted.
    pub expr: Option<Expr>,
    pub diagnostics: Diagnostics,
}

impl Compilation {
    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    /// The tree, only if no compile error was reported.
    pub fn tree(&self) -> Option<&Expr> {
        if self.had_error() {
            None
        } else {
            self.expr.as_ref()
        }
    }
}

/// Scan `source` completely, then parse the tokens as one expression.
pub fn compile(source: &str) -> Compilation {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let expr = Parser::new(tokens.clone()).parse(&mut diagnostics);
    debug!(
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "compiled source"
    );
    Compilation {
        tokens,
        expr,
        diagnostics,
    }
}

/// Runs sources and reports to an output and an error stream.
pub struct Session<W: Write, E: Write> {
    out: W,
    err: E,
    emit: EmitMode,
    color: bool,
}

impl<W: Write, E: Write> Session<W, E> {
    pub fn new(out: W, err: E, emit: EmitMode) -> Self {
        Self {
            out,
            err,
            emit,
            color: false,
        }
    }

    /// Style diagnostics for a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Compile one source text and write its results.
    ///
    /// Returns `Ok(true)` if a compile error was reported.
    pub fn run(&mut self, source: &str) -> Result<bool, DriverError> {
        match self.emit {
            EmitMode::Ast => {
                let compilation = compile(source);
                self.write_diagnostics(&compilation.diagnostics)?;
                if let Some(expr) = compilation.tree() {
                    writeln!(self.out, "{}", AstPrinter::new().print(expr))?;
                }
                Ok(compilation.had_error())
            }
            EmitMode::Tokens => {
                let mut diagnostics = Diagnostics::new();
                let tokens = scan(source, &mut diagnostics);
                self.write_diagnostics(&diagnostics)?;
                for token in &tokens {
                    writeln!(self.out, "{}", token)?;
                }
                Ok(diagnostics.had_error())
            }
        }
    }

    /// Read and run a whole script file.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD and are then reported by
    /// the lexer like any other unexpected character.
    pub fn run_file(&mut self, path: &Path) -> Result<bool, DriverError> {
        let bytes = fs::read(path).map_err(|source| DriverError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "running script");
        self.run(&String::from_utf8_lossy(&bytes))
    }

    /// Read-eval-print loop: one compilation per input line until end of input.
    ///
    /// Errors on one line never affect the next. Lines are decoded lossily,
    /// so invalid UTF-8 is a compile error rather than the end of the session.
    pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> Result<(), DriverError> {
        let mut buf = Vec::new();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let had_error = self.run(line.trim_end_matches(['\n', '\r']))?;
            debug!(had_error, "prompt line done");
        }
        Ok(())
    }

    /// Give back the output and error streams.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_diagnostics(&mut self, diagnostics: &Diagnostics) -> Result<(), DriverError> {
        for diagnostic in diagnostics {
            self.write_diagnostic(diagnostic)?;
        }
        self.err.flush()?;
        Ok(())
    }

    fn write_diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<(), DriverError> {
        if self.color {
            writeln!(self.err, "{}", diagnostic.to_string().red())?;
        } else {
            writeln!(self.err, "{}", diagnostic)?;
        }
        Ok(())
    }
}
