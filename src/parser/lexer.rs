//! Lexer (scanner) for Lox source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Scanning never stops at a bad character: the problem is reported to the
//! caller's [`Diagnostics`] and the character is skipped, so a single pass
//! surfaces every lexical error in the input.

use super::token::{Literal, Token, TokenKind};
use crate::diagnostics::Diagnostics;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Reserved words, resolved once per process.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ]
    .into_iter()
    .collect()
});

/// Look up a reserved word.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Scan `source` into tokens, reporting lexical errors into `diagnostics`.
///
/// The returned sequence always ends with exactly one [`TokenKind::Eof`].
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    Lexer::new(source).tokenize(diagnostics)
}

/// Lexer for Lox source code
pub struct Lexer {
    input: Vec<char>,
    /// First character of the lexeme being scanned
    start: usize,
    /// Next character to consume
    position: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            start: 0,
            position: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self, diagnostics: &mut Diagnostics) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.position;
            self.scan_token(diagnostics);
        }

        self.tokens.push(Token::eof(self.line));
        debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "scan complete"
        );
        self.tokens
    }

    /// Scan one lexeme starting at `self.start`
    fn scan_token(&mut self, diagnostics: &mut Diagnostics) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Newlines are counted in `advance`
            ' ' | '\r' | '\t' | '\n' => {}

            '"' => self.string_literal(diagnostics),

            c if c.is_ascii_digit() => self.number_literal(),

            c if is_alpha(c) => self.identifier_or_keyword(),

            _ => diagnostics.error_at_line(self.line, "Unexpected character."),
        }
    }

    /// Parse string literal; the opening quote is already consumed
    fn string_literal(&mut self, diagnostics: &mut Diagnostics) {
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            self.advance();
        }

        if self.is_at_end() {
            diagnostics.error_at_line(self.line, "Unterminated string.");
            return;
        }

        self.advance(); // consume closing quote

        let value: String = self.input[self.start + 1..self.position - 1].iter().collect();
        self.add_literal_token(TokenKind::String, Literal::String(value));
    }

    /// Parse numeric literal: digits, optionally `.` followed by more digits
    fn number_literal(&mut self) {
        self.consume_digits();

        // A dot is only part of the number when a digit follows it
        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume '.'
            self.consume_digits();
        }

        // `digits [. digits]` always parses; overflow gives infinity, not an error
        let value = self.current_lexeme().parse::<f64>().unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let kind = keyword(&self.current_lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Skip the rest of a `//` comment, leaving the newline for the main loop
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.current_lexeme(), literal, self.line);
        trace!(%token, line = token.line, "token");
        self.tokens.push(token);
    }

    /// Source text of the lexeme scanned so far
    fn current_lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    /// Consume the next character only if it is `expected`
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn lex(source: &str) -> (Vec<Token>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(source, &mut diagnostics);
        (tokens, diagnostics)
    }

    #[test]
    fn test_simple_tokens() {
        let (tokens, diagnostics) = lex("(){},.-+;*/");
        assert!(!diagnostics.had_error());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        let (tokens, _) = lex("! != = == < <= > >=");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Bang,
                TokenKind::BangEqual,
                TokenKind::Equal,
                TokenKind::EqualEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[3].lexeme, "==");
    }

    #[test]
    fn test_comments() {
        let (tokens, diagnostics) = lex("1 // the rest ( is ignored\n/ 2");
        assert!(!diagnostics.had_error());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Slash,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let (tokens, _) = lex("// only a comment");
        assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_string_literal() {
        let (tokens, diagnostics) = lex("\"hello world\"");
        assert!(!diagnostics.had_error());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello world\"");
        assert_eq!(
            tokens[0].literal,
            Some(Literal::String("hello world".to_string()))
        );
    }

    #[test]
    fn test_multiline_string_advances_line() {
        let (tokens, diagnostics) = lex("\"one\ntwo\nthree\" +");
        assert!(!diagnostics.had_error());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, diagnostics) = lex("1 \"never closed");
        assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Eof]);
        let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
        assert_eq!(messages, vec!["[line 1] Error: Unterminated string."]);
    }

    #[test]
    fn test_number_literals() {
        let (tokens, _) = lex("123 45.67");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[1].literal, Some(Literal::Number(45.67)));
        assert_eq!(tokens[1].lexeme, "45.67");
    }

    #[test]
    fn test_oversized_number_is_infinite() {
        let source = format!("1{}", "0".repeat(400));
        let (tokens, diagnostics) = lex(&source);
        assert!(!diagnostics.had_error());
        assert_eq!(tokens[0].literal, Some(Literal::Number(f64::INFINITY)));
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_number() {
        let (tokens, _) = lex("1.");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
        );
        assert_eq!(tokens[0].lexeme, "1");
    }

    #[test]
    fn test_leading_dot_is_not_part_of_number() {
        let (tokens, _) = lex(".5");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
        );
        assert_eq!(tokens[1].lexeme, "5");
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let (tokens, _) = lex("var _tmp1 = nil and true or false orchid");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Nil,
                TokenKind::And,
                TokenKind::True,
                TokenKind::Or,
                TokenKind::False,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].lexeme, "_tmp1");
        assert_eq!(tokens[8].lexeme, "orchid");
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword("while"), Some(TokenKind::While));
        assert_eq!(keyword("While"), None);
    }

    #[test]
    fn test_unexpected_characters_do_not_stop_scan() {
        let (tokens, diagnostics) = lex("1 @ 2\n# 3");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
        let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "[line 1] Error: Unexpected character.",
                "[line 2] Error: Unexpected character.",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let (tokens, diagnostics) = lex("");
        assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
        assert_eq!(tokens[0].line, 1);
        assert!(!diagnostics.had_error());
    }

    #[test]
    fn test_eof_carries_last_line() {
        let (tokens, _) = lex("1\n2\n");
        assert_eq!(tokens.last().map(|t| t.line), Some(3));
    }
}
