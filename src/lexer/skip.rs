//! Whitespace and comment skipping for the lexer.
//!
//! This module provides methods for skipping over whitespace characters
//! and both line and (nested) block comments during tokenization.

use crate::token::Span;

use super::Lexer;
use super::error::LexError;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments in a loop.
    ///
    /// This method handles the case where a comment might be followed by
    /// whitespace, which might be followed by another comment, etc.
    pub(super) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            self.skip_whitespace();
            if self.input[self.pos..].starts_with("//") {
                self.skip_line_comment();
                continue;
            }
            if self.input[self.pos..].starts_with("/*") {
                self.skip_block_comment()?;
                continue;
            }
            break;
        }
        Ok(())
    }

    /// Skips consecutive whitespace characters, including newlines.
    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    /// Skips a line comment starting at the current position.
    ///
    /// Line comments start with `//` and extend to (but do not consume)
    /// the end of the line.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skips a block comment starting at the current position.
    ///
    /// Block comments are delimited by `/*` and `*/` and nest: a `/*` found
    /// inside an already-open block comment opens another level, and the
    /// comment only ends once every level has been closed.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_span = Span::new(self.pos, self.pos, self.line, self.column);
        self.advance(); // '/'
        self.advance(); // '*'
        let mut depth = 1;

        while depth > 0 {
            if self.is_eof() {
                return Err(LexError::new("Unterminated block comment.", start_span));
            }
            if self.input[self.pos..].starts_with("/*") {
                self.advance();
                self.advance();
                depth += 1;
            } else if self.input[self.pos..].starts_with("*/") {
                self.advance();
                self.advance();
                depth -= 1;
            } else {
                self.advance();
            }
        }

        Ok(())
    }
}
