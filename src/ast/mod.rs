//! Abstract Syntax Tree definitions for the Lox programming language.
//!
//! This module defines the data structures that represent parsed Lox
//! programs. The AST is produced by the [`crate::parser`], annotated with
//! scope distances by the [`crate::resolver`], and walked directly by the
//! [`crate::interpreter`] — there is no lowering to any intermediate or
//! machine representation.
//!
//! # Structure
//!
//! - [`Stmt`] / [`StmtKind`] - statements: declarations and control flow
//! - [`Expr`] / [`ExprKind`] - expressions, each carrying a unique [`NodeIdGen`]-assigned id
//! - [`Literal`] - the literal values a token can carry into the tree
//!
//! Each AST node includes source location information ([`Span`](crate::token::Span))
//! for error reporting.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::resolver`] - Annotates variable references with scope distance
//! * [`crate::interpreter`] - Walks the AST to evaluate it

mod expr;
mod stmt;

pub use expr::{BinaryOp, Expr, ExprKind, Literal, LogicalOp, NodeIdGen, UnaryOp};
pub use stmt::{FunctionDecl, Stmt, StmtKind};
