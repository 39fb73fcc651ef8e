//! Expression parsing implementation
//!
//! One method per precedence level, lowest first:
//!
//! ```text
//! expression → equality
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//! ```
//!
//! Every binary level is left-associative. All parsing methods are
//! implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Expr;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::{Literal, TokenKind};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_equality()
    }

    /// Parse equality (`==`, `!=`)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::parse_comparison,
        )
    }

    /// Parse comparison (`>`, `>=`, `<`, `<=`)
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::parse_term,
        )
    }

    /// Parse additive (`-`, `+`)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&[TokenKind::Minus, TokenKind::Plus], Self::parse_factor)
    }

    /// Parse multiplicative (`/`, `*`)
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&[TokenKind::Slash, TokenKind::Star], Self::parse_unary)
    }

    /// Shared loop for the binary levels: parse one operand, then fold
    /// `operator operand` pairs into a left-leaning chain.
    fn parse_left_assoc(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut left = operand(self)?;

        // Each fold makes the left spine one node deeper
        while self.match_token(operators) {
            let operator = self.previous().clone();
            self.enter()?;
            let right = operand(self)?;
            left = Expr::binary(left, operator, right);
        }

        self.depth = depth;
        Ok(left)
    }

    /// Parse prefix operators; they stack (`- - 1`, `!!x`)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            self.enter()?;
            let right = self.parse_unary()?;
            self.depth -= 1;
            return Ok(Expr::unary(operator, right));
        }

        self.parse_primary()
    }

    /// Parse primary expressions (literals, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(&[TokenKind::False]) {
            return Ok(Expr::from(Literal::Bool(false)));
        }
        if self.match_token(&[TokenKind::True]) {
            return Ok(Expr::from(Literal::Bool(true)));
        }
        if self.match_token(&[TokenKind::Nil]) {
            return Ok(Expr::nil());
        }

        if self.match_token(&[TokenKind::Number, TokenKind::String]) {
            return Ok(Expr::literal(self.previous().literal.clone()));
        }

        if self.match_token(&[TokenKind::LeftParen]) {
            self.enter()?;
            let expr = self.parse_expression()?;
            self.expect_token(TokenKind::RightParen, "Expect ')' after expression.")?;
            self.depth -= 1;
            return Ok(Expr::grouping(expr));
        }

        Err(self.error_at_current("Expect expression."))
    }
}
