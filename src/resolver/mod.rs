//! Static scope resolution for the Lox language.
//!
//! This module walks the parsed AST once, before evaluation, and works out
//! exactly how many enclosing scopes separate each variable reference from
//! the scope that declares it. The evaluator then uses that precomputed
//! distance to look a variable up directly in the right
//! [`crate::interpreter::Environment`] rather than walking the parent chain
//! and guessing, which is what makes closures behave consistently even when
//! a variable is later shadowed by a new declaration of the same name.
//!
//! # Scope tracking
//!
//! A `Vec` of scopes acts as a stack: the last entry is the innermost scope.
//! Each scope maps a variable name to whether it has finished being
//! declared (`false` while its own initializer is being resolved, `true`
//! once defined), which lets [`resolve_local`] catch `var x = x;` as a
//! compile error instead of silently reading whatever `x` meant in an
//! enclosing scope.
//!
//! Global scope is never pushed onto this stack: a name that resolves to
//! nothing in any local scope is left unresolved, and the evaluator falls
//! back to a dynamic lookup in the global environment. This mirrors the
//! language's own behavior, where top-level declarations can appear after
//! the code that (at call time) ends up using them.

mod error;

pub use error::ResolveError;

use std::collections::HashMap;

use crate::ast::{Expr, ExprKind, FunctionDecl, Stmt, StmtKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionKind {
    None,
    Function,
}

/// Resolves every variable reference in `statements` to a scope distance.
///
/// # Returns
///
/// * `Ok(HashMap<u32, usize>)` - maps each [`Expr`] node id that resolved to
///   a local variable to the number of scopes between its use and its
///   declaration. Node ids absent from the map refer to globals.
/// * `Err(Vec<ResolveError>)` - every static error found, in source order.
pub fn resolve(statements: &[Stmt]) -> Result<HashMap<u32, usize>, Vec<ResolveError>> {
    let mut resolver = Resolver::new();
    resolver.resolve_stmts(statements);

    if resolver.errors.is_empty() {
        Ok(resolver.locals)
    } else {
        Err(resolver.errors)
    }
}

struct Resolver {
    scopes: Vec<HashMap<String, bool>>,
    locals: HashMap<u32, usize>,
    errors: Vec<ResolveError>,
    current_function: FunctionKind,
}

impl Resolver {
    fn new() -> Self {
        Resolver {
            scopes: Vec::new(),
            locals: HashMap::new(),
            errors: Vec::new(),
            current_function: FunctionKind::None,
        }
    }

    fn resolve_stmts(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.resolve_stmt(stmt);
        }
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expression(expr) => self.resolve_expr(expr),
            StmtKind::Print(expr) => self.resolve_expr(expr),
            StmtKind::Var { name, init } => {
                self.declare(name);
                if let Some(init) = init {
                    self.resolve_expr(init);
                }
                self.define(name);
            }
            StmtKind::Block(stmts) => {
                self.begin_scope();
                self.resolve_stmts(stmts);
                self.end_scope();
            }
            StmtKind::If { condition, then_branch, else_branch } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                // The else branch is a statement, not a sub-expression of the
                // condition: it gets its own resolution pass, independent of
                // whatever the then-branch declared.
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            StmtKind::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
            StmtKind::Function(decl) => {
                self.declare(&decl.name);
                self.define(&decl.name);
                self.resolve_function(decl, FunctionKind::Function);
            }
            StmtKind::Return { span, value } => {
                if self.current_function == FunctionKind::None {
                    self.errors.push(ResolveError {
                        message: "Can't return from top-level code.".to_string(),
                        span: *span,
                    });
                }
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
            StmtKind::Class { name, methods } => {
                self.declare(name);
                self.define(name);
                for method in methods {
                    self.resolve_function(method, FunctionKind::Function);
                }
            }
        }
    }

    fn resolve_function(&mut self, decl: &FunctionDecl, kind: FunctionKind) {
        let enclosing_function = self.current_function;
        self.current_function = kind;

        self.begin_scope();
        for param in &decl.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve_stmts(&decl.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(_) => {}
            ExprKind::Grouping(inner) => self.resolve_expr(inner),
            ExprKind::Unary { right, .. } => self.resolve_expr(right),
            ExprKind::Binary { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            ExprKind::Variable(name) => {
                if let Some(scope) = self.scopes.last()
                    && scope.get(name) == Some(&false)
                {
                    self.errors.push(ResolveError {
                        message: "Can't read local variable in its own initializer.".to_string(),
                        span: expr.span,
                    });
                }
                self.resolve_local(expr.id, name);
            }
            ExprKind::Assign { name, value } => {
                self.resolve_expr(value);
                self.resolve_local(expr.id, name);
            }
            ExprKind::Call { callee, args } => {
                self.resolve_expr(callee);
                for arg in args {
                    self.resolve_expr(arg);
                }
            }
        }
    }

    /// Walks the scope stack from innermost to outermost looking for `name`,
    /// recording the distance into `locals` the moment it's found. A name
    /// that isn't found in any scope is left unresolved: the evaluator
    /// treats that as a reference to a global.
    fn resolve_local(&mut self, node_id: u32, name: &str) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(name) {
                self.locals.insert(node_id, depth);
                return;
            }
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks `name` as declared-but-not-yet-defined in the innermost scope.
    ///
    /// No-op at global scope. A second declaration of the same name in the
    /// same scope simply overwrites the first entry rather than erroring.
    fn declare(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), false);
        }
    }

    fn define(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn resolve_source(source: &str) -> Result<HashMap<u32, usize>, Vec<ResolveError>> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize().unwrap();
        let parser = Parser::new(tokens);
        let stmts = parser.parse().unwrap();
        resolve(&stmts)
    }

    #[test]
    fn test_global_reference_is_unresolved() {
        let locals = resolve_source("var x = 1; print x;").unwrap();
        assert!(locals.is_empty());
    }

    #[test]
    fn test_local_reference_resolves_to_distance_zero() {
        let locals = resolve_source("{ var x = 1; print x; }").unwrap();
        assert_eq!(locals.len(), 1);
        assert_eq!(*locals.values().next().unwrap(), 0);
    }

    #[test]
    fn test_reference_in_enclosing_block_resolves_to_distance_one() {
        let locals = resolve_source("{ var x = 1; { print x; } }").unwrap();
        assert_eq!(locals.len(), 1);
        assert_eq!(*locals.values().next().unwrap(), 1);
    }

    #[test]
    fn test_self_referential_initializer_is_an_error() {
        let errs = resolve_source("{ var x = x; }").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("its own initializer"));
    }

    #[test]
    fn test_redeclaration_in_same_scope_is_fine() {
        assert!(resolve_source("{ var x = 1; var x = 2; print x; }").is_ok());
    }

    #[test]
    fn test_shadowing_across_blocks_is_fine() {
        assert!(resolve_source("var x = 1; { var x = 2; print x; }").is_ok());
    }

    #[test]
    fn test_top_level_return_is_an_error() {
        let errs = resolve_source("return 1;").unwrap_err();
        assert!(errs[0].message.contains("top-level"));
    }

    #[test]
    fn test_return_inside_function_is_fine() {
        assert!(resolve_source("fun f() { return 1; }").is_ok());
    }

    #[test]
    fn test_closure_captures_outer_local_at_correct_distance() {
        let locals = resolve_source(
            "fun outer() { var x = 1; fun inner() { print x; } inner(); }",
        )
        .unwrap();
        // `x` read inside `inner`, one function-scope away from its declaration.
        assert_eq!(locals.len(), 1);
        assert_eq!(*locals.values().next().unwrap(), 1);
    }
}
