//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Bang => "'!'".to_string(),
            TokenKind::BangEqual => "'!='".to_string(),
            TokenKind::Equal => "'='".to_string(),
            TokenKind::EqualEqual => "'=='".to_string(),
            TokenKind::Greater => "'>'".to_string(),
            TokenKind::GreaterEqual => "'>='".to_string(),
            TokenKind::Less => "'<'".to_string(),
            TokenKind::LessEqual => "'<='".to_string(),
            TokenKind::Identifier(s) => format!("identifier '{s}'"),
            TokenKind::StringLiteral(s) => format!("string \"{s}\""),
            TokenKind::Number(n) => format!("number '{n}'"),
            TokenKind::And => "'and'".to_string(),
            TokenKind::Class => "'class'".to_string(),
            TokenKind::Else => "'else'".to_string(),
            TokenKind::False => "'false'".to_string(),
            TokenKind::Fun => "'fun'".to_string(),
            TokenKind::For => "'for'".to_string(),
            TokenKind::If => "'if'".to_string(),
            TokenKind::Nil => "'nil'".to_string(),
            TokenKind::Or => "'or'".to_string(),
            TokenKind::Print => "'print'".to_string(),
            TokenKind::Return => "'return'".to_string(),
            TokenKind::Super => "'super'".to_string(),
            TokenKind::This => "'this'".to_string(),
            TokenKind::True => "'true'".to_string(),
            TokenKind::Var => "'var'".to_string(),
            TokenKind::While => "'while'".to_string(),
            TokenKind::Eof => "end of file".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token and returns the one just consumed.
    ///
    /// Does nothing but return the current token again if already at `Eof`.
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_eof() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1).min(self.tokens.len() - 1)]
    }

    /// Returns `true` without consuming if the current token matches `kind`.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token if it matches `kind`.
    pub(super) fn matches(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to match `expected` and advances.
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<&Token, ParseError> {
        if self.current_kind() == expected {
            Ok(self.advance())
        } else {
            Err(ParseError {
                message: format!(
                    "Expected {}, found {}.",
                    Self::token_kind_display(expected),
                    Self::token_kind_display(self.current_kind())
                ),
                span: self.current_span(),
            })
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError {
                message: format!(
                    "Expected identifier, found {}.",
                    Self::token_kind_display(self.current_kind())
                ),
                span: self.current_span(),
            })
        }
    }

    /// Discards tokens until it finds a plausible statement boundary.
    ///
    /// Called after a parse error to recover rather than abort the entire
    /// parse: it consumes tokens up through the next `;`, or up to (but not
    /// consuming) a token that starts a new declaration or statement.
    pub(super) fn synchronize(&mut self) {
        while !self.is_eof() {
            if matches!(self.current_kind(), TokenKind::Semicolon) {
                self.advance();
                return;
            }

            if matches!(
                self.current_kind(),
                TokenKind::Class
                    | TokenKind::Fun
                    | TokenKind::Var
                    | TokenKind::For
                    | TokenKind::If
                    | TokenKind::While
                    | TokenKind::Print
                    | TokenKind::Return
            ) {
                return;
            }

            self.advance();
        }
    }
}
