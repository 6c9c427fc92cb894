//! Parser for the Lox programming language.
//!
//! This module provides the [`Parser`] struct which transforms a token stream
//! into an Abstract Syntax Tree (a `Vec<Stmt>`).
//!
//! # Overview
//!
//! The parser implements a recursive descent parsing strategy with explicit
//! precedence-chain functions for expressions (see [`expr`]). It consumes
//! tokens produced by the [`crate::lexer`] and builds an AST suitable for
//! the [`crate::resolver`] and then the [`crate::interpreter`] to walk.
//!
//! # Error recovery
//!
//! A single malformed declaration does not abort the whole parse. On a
//! parse error, [`Parser::parse`] records the error, calls
//! [`Parser::synchronize`] to skip to a plausible statement boundary, and
//! keeps going — so a source file with three unrelated syntax errors is
//! reported all three times in one pass, rather than stopping at the first.
//!
//! # Examples
//!
//! ```
//! use lox::lexer::Lexer;
//! use lox::parser::Parser;
//!
//! let mut lexer = Lexer::new("print 1 + 2;");
//! let tokens = lexer.tokenize().unwrap();
//!
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().unwrap();
//! assert_eq!(program.len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and basic parsing operations
//! - `stmt` - Statement and declaration parsing
//! - `expr` - Expression parsing (the precedence chain)
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::resolver`] - Consumes the AST to resolve variable scopes

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::{NodeIdGen, Stmt};
use crate::token::Token;

/// A recursive descent parser for the Lox language.
///
/// The parser maintains a position within the token stream and a node id
/// generator shared across the whole parse, so every expression gets a
/// unique id regardless of which production created it.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce a list of top-level statements.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Assigns each expression node a unique id as it is built.
    node_ids: NodeIdGen,
    /// Errors accumulated across declarations recovered from via `synchronize`.
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    ///
    /// Panics if the token list is empty. The lexer should always
    /// produce at least an `Eof` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "Token list must not be empty");
        Parser {
            tokens,
            pos: 0,
            node_ids: NodeIdGen::new(),
            errors: Vec::new(),
        }
    }

    /// Parses the entire token stream into a list of top-level statements.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Stmt>)` - if no syntax errors occurred
    /// * `Err(Vec<ParseError>)` - every error recovered from, in source order
    pub fn parse(mut self) -> Result<Vec<Stmt>, Vec<ParseError>> {
        let mut statements = Vec::new();

        while !self.is_eof() {
            if let Some(stmt) = self.parse_declaration() {
                statements.push(stmt);
            }
        }

        if self.errors.is_empty() {
            Ok(statements)
        } else {
            Err(self.errors)
        }
    }

    fn next_id(&mut self) -> u32 {
        self.node_ids.next()
    }
}
