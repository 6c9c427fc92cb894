//! Resolver error types.

use crate::token::Span;

/// An error detected during the static variable-resolution pass.
///
/// These are compile-time errors the evaluator would otherwise only catch at
/// the point of use (or never catch at all, silently doing the wrong thing),
/// e.g. reading a local variable from within its own initializer.
#[derive(Debug)]
pub struct ResolveError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ResolveError {}
