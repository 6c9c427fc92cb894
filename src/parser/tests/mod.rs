//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`stmt`]: Declaration and statement parsing (var, block, if, while, for, return, class)
//! - [`expr`]: Expression parsing (precedence, calls, assignment, literals)
//! - [`errors`]: Error detection and recovery
//! - [`helpers`]: Parser navigation utilities

use super::*;
use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::lexer::Lexer;

mod errors;
mod helpers;

/// Parses input and returns the top-level statements.
pub(super) fn parse(input: &str) -> Result<Vec<Stmt>, Vec<ParseError>> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {:?}", input, e));
    let parser = Parser::new(tokens);
    parser.parse()
}

/// Parses a single-statement source and returns it.
pub(super) fn parse_one(input: &str) -> Stmt {
    let mut stmts = parse(input).unwrap_or_else(|e| panic!("Failed to parse {:?}: {:?}", input, e));
    assert_eq!(stmts.len(), 1, "expected exactly one statement in {:?}", input);
    stmts.remove(0)
}

/// Parses `expr;` and returns the inner expression.
pub(super) fn parse_expr(input: &str) -> Expr {
    let stmt = parse_one(&format!("{input};"));
    match stmt.kind {
        StmtKind::Expression(expr) => expr,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

/// Parses input expecting failure, and returns the accumulated errors.
pub(super) fn parse_errors(input: &str) -> Vec<ParseError> {
    match parse(input) {
        Ok(stmts) => panic!(
            "Expected parsing to fail for input {:?}, but it succeeded with {} statements",
            input,
            stmts.len()
        ),
        Err(errs) => errs,
    }
}
