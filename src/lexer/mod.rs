//! Lexical analyzer for the Lox programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes identifiers, keywords, numbers, and strings
//! - Tracks source positions for error reporting
//! - Skips whitespace and both line (`//`) and nested block (`/* */`) comments
//!
//! # Error recovery
//!
//! Unlike a parser, which stops being able to make sense of a token stream
//! as soon as a production fails, lexical scanning is local: one bad
//! character says nothing about the next one. [`Lexer::tokenize`] takes
//! advantage of this and keeps scanning past an error, so a source file
//! with three bad string literals gets reported all three times rather than
//! stopping at the first.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - `cursor` - Position tracking and character navigation
//! - `skip` - Whitespace and comment handling
//! - `tokens` - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Lox source code.
///
/// The `Lexer` maintains its position within the input and tracks line/column
/// numbers for error reporting. It is designed to be used once per source
/// snippet (one file, or one REPL line).
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input.
    ///
    /// Scanning never stops at the first bad character: every error
    /// encountered is collected, and scanning resumes right after it. The
    /// returned token vector always ends with an [`TokenKind::Eof`] token,
    /// even when errors were produced, so a caller that chooses to parse
    /// anyway still has a well-formed stream to work with.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Token>)` - if no lexical errors occurred
    /// * `Err(Vec<LexError>)` - every error encountered, in source order
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Vec<LexError>> {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            if let Err(err) = self.skip_trivia() {
                errors.push(err);
                continue;
            }

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, "", span));
                break;
            }

            match self.next_token() {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }
}
