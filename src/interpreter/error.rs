//! Runtime error type.

use crate::token::Span;

/// An error raised while evaluating a resolved AST.
///
/// Unlike the static error types ([`crate::lexer::LexError`],
/// [`crate::parser::ParseError`], [`crate::resolver::ResolveError`]), a
/// `RuntimeError` aborts the program currently being interpreted rather than
/// being collected alongside its siblings: once one is raised, evaluation
/// unwinds straight back to [`super::Interpreter::interpret`].
#[derive(Debug)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
    /// The lexeme of the token most responsible for the error, if any
    /// (e.g. the operator, or the variable name). Empty when no single
    /// token captures the failure (e.g. calling a non-callable value).
    pub lexeme: String,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>, span: Span, lexeme: impl Into<String>) -> Self {
        RuntimeError {
            message: message.into(),
            span,
            lexeme: lexeme.into(),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line: {}, at {}] Error: {}",
            self.span.line, self.lexeme, self.message
        )
    }
}

impl std::error::Error for RuntimeError {}
