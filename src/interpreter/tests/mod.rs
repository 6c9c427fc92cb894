//! Pipeline-level tests for the evaluator: lex → parse → resolve → interpret.
//!
//! Unlike the unit tests embedded in `environment.rs` and `value.rs`, these
//! drive the interpreter the way a real program would, through the same
//! `run` entry point `src/driver/mod.rs` uses.

mod functions;

use std::collections::HashMap;

use crate::ast::Stmt;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::resolver;

use super::{Interpreter, RuntimeError};

/// Lexes, parses, and resolves `source`, panicking on any static error.
/// Used by tests that only care about runtime behavior.
fn compile(source: &str) -> (Vec<Stmt>, HashMap<u32, usize>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().expect("lex error");
    let parser = Parser::new(tokens);
    let statements = parser.parse().expect("parse error");
    let locals = resolver::resolve(&statements).expect("resolve error");
    (statements, locals)
}

/// Runs `source` against a fresh interpreter, returning its result.
fn interpret(source: &str) -> Result<(), RuntimeError> {
    let (statements, locals) = compile(source);
    let mut interpreter = Interpreter::new();
    interpreter.set_locals(locals);
    interpreter.interpret(&statements)
}

/// Runs `source` against an existing interpreter, preserving its globals —
/// the way successive REPL lines share one interpreter.
fn interpret_with(interpreter: &mut Interpreter, source: &str) -> Result<(), RuntimeError> {
    let (statements, locals) = compile(source);
    interpreter.set_locals(locals);
    interpreter.interpret(&statements)
}
