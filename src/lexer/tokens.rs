//! Token recognition and reading.
//!
//! This module implements the actual scanning logic: turning the character
//! at the cursor (and as much lookahead as a given token needs) into a
//! [`Token`].

use crate::token::{Span, Token, TokenKind};

use super::Lexer;
use super::error::LexError;

impl<'a> Lexer<'a> {
    /// Reads and returns the next token, advancing the cursor past it.
    ///
    /// Assumes whitespace and comments have already been skipped and the
    /// cursor is not at EOF.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_span = Span::new(self.pos, self.pos, self.line, self.column);

        let c = self.advance().expect("next_token called at EOF");

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '!' => {
                if self.advance_if('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                if self.advance_if('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '<' => {
                if self.advance_if('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.advance_if('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '"' => return self.read_string(start_span),
            c if c.is_ascii_digit() => return self.read_number(start_span),
            c if is_identifier_start(c) => return self.read_identifier_or_keyword(start_span),
            other => {
                let span = Span::new(start_pos, self.pos, start_span.line, start_span.column);
                return Err(LexError::new(
                    format!("Unexpected character '{other}'."),
                    span,
                ));
            }
        };

        let span = Span::new(start_pos, self.pos, start_span.line, start_span.column);
        Ok(Token::new(kind, &self.input[start_pos..self.pos], span))
    }

    /// Reads a string literal. The opening quote has already been consumed.
    ///
    /// Lox strings support no escape sequences: every byte up to the closing
    /// quote is taken literally, including embedded newlines.
    fn read_string(&mut self, start_span: Span) -> Result<Token, LexError> {
        let start_pos = start_span.start;
        let content_start = self.pos;

        loop {
            match self.current_char() {
                None => {
                    let span = Span::new(start_pos, self.pos, start_span.line, start_span.column);
                    return Err(LexError::new("Unterminated string.", span));
                }
                Some('"') => break,
                Some(_) => {
                    self.advance();
                }
            }
        }

        let content = self.input[content_start..self.pos].to_string();
        self.advance(); // closing quote

        let span = Span::new(start_pos, self.pos, start_span.line, start_span.column);
        Ok(Token::new(
            TokenKind::StringLiteral(content),
            &self.input[start_pos..self.pos],
            span,
        ))
    }

    /// Reads a numeric literal. The first digit has already been consumed.
    ///
    /// A `.` only starts a fractional part when it is followed by another
    /// digit; `1.` alone stops at `1`, leaving the `.` for whatever follows
    /// it (e.g. a method-style call, or just a parse error if nothing does).
    fn read_number(&mut self, start_span: Span) -> Result<Token, LexError> {
        let start_pos = start_span.start;

        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.') && self.peek_char().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = &self.input[start_pos..self.pos];
        let value: f64 = lexeme.parse().map_err(|_| {
            LexError::new(
                format!("Invalid number literal '{lexeme}'."),
                Span::new(start_pos, self.pos, start_span.line, start_span.column),
            )
        })?;

        let span = Span::new(start_pos, self.pos, start_span.line, start_span.column);
        Ok(Token::new(TokenKind::Number(value), lexeme, span))
    }

    /// Reads an identifier or keyword. The first character has already been consumed.
    fn read_identifier_or_keyword(&mut self, start_span: Span) -> Result<Token, LexError> {
        let start_pos = start_span.start;

        while self.current_char().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let lexeme = &self.input[start_pos..self.pos];
        let kind =
            TokenKind::keyword(lexeme).unwrap_or_else(|| TokenKind::Identifier(lexeme.to_string()));

        let span = Span::new(start_pos, self.pos, start_span.line, start_span.column);
        Ok(Token::new(kind, lexeme, span))
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
