//! Statement parsing.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → classDecl | funDecl | varDecl | statement
//! classDecl   → "class" IDENTIFIER "{" function* "}"
//! funDecl     → "fun" function
//! function    → IDENTIFIER "(" parameters? ")" block
//! parameters  → IDENTIFIER ( "," IDENTIFIER )*
//! varDecl     → "var" IDENTIFIER ( "=" expression )? ";"
//! statement   → exprStmt | forStmt | ifStmt | printStmt
//!             | returnStmt | whileStmt | block
//! exprStmt    → expression ";"
//! forStmt     → "for" "(" ( varDecl | exprStmt | ";" )
//!                          expression? ";" expression? ")" statement
//! ifStmt      → "if" "(" expression ")" statement ( "else" statement )?
//! printStmt   → "print" expression ";"
//! returnStmt  → "return" expression? ";"
//! whileStmt   → "while" "(" expression ")" statement
//! block       → "{" declaration* "}"
//! ```
//!
//! `for` loops are desugared here, not carried into the AST: a `for` becomes
//! an optional initializer statement followed by a `while` whose body is the
//! loop body with the increment appended, all wrapped in a block so the
//! initializer's variable stays scoped to the loop.

use std::rc::Rc;

use super::Parser;
use super::error::ParseError;
use crate::ast::{FunctionDecl, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single declaration, recovering via [`Parser::synchronize`] on error.
    pub(super) fn parse_declaration(&mut self) -> Option<Stmt> {
        let result = if self.matches(&TokenKind::Class) {
            self.parse_class_decl()
        } else if self.matches(&TokenKind::Fun) {
            self.parse_function_decl()
        } else if self.matches(&TokenKind::Var) {
            self.parse_var_decl()
        } else {
            self.parse_statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                self.errors.push(err);
                self.synchronize();
                None
            }
        }
    }

    fn parse_class_decl(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftBrace)?;

        let mut methods = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            methods.push(Rc::new(self.parse_function()?));
        }

        self.expect(&TokenKind::RightBrace)?;
        Ok(Stmt::new(StmtKind::Class { name, methods }, span))
    }

    fn parse_function_decl(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;
        let decl = self.parse_function()?;
        Ok(Stmt::new(StmtKind::Function(Rc::new(decl)), span))
    }

    /// Parses a `function` production: name, parameter list, and body. Used
    /// both for top-level `fun` declarations and for class methods.
    fn parse_function(&mut self) -> Result<FunctionDecl, ParseError> {
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= 255 {
                    self.errors.push(ParseError {
                        message: "Can't have more than 255 parameters.".to_string(),
                        span: self.current_span(),
                    });
                }
                params.push(self.expect_identifier()?);
                if !self.matches(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen)?;

        self.expect(&TokenKind::LeftBrace)?;
        let body = self.parse_block_body()?;

        Ok(FunctionDecl { name, params, body })
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;
        let name = self.expect_identifier()?;

        let init = if self.matches(&TokenKind::Equal) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Var { name, init }, span))
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.matches(&TokenKind::Print) {
            self.parse_print_stmt()
        } else if self.matches(&TokenKind::LeftBrace) {
            let span = self.tokens[self.pos - 1].span;
            let body = self.parse_block_body()?;
            Ok(Stmt::new(StmtKind::Block(body), span))
        } else if self.matches(&TokenKind::If) {
            self.parse_if_stmt()
        } else if self.matches(&TokenKind::While) {
            self.parse_while_stmt()
        } else if self.matches(&TokenKind::For) {
            self.parse_for_stmt()
        } else if self.matches(&TokenKind::Return) {
            self.parse_return_stmt()
        } else {
            self.parse_expr_stmt()
        }
    }

    fn parse_print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;
        let value = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Print(value), span))
    }

    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        let span = expr.span;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }

    fn parse_block_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            if let Some(stmt) = self.parse_declaration() {
                stmts.push(stmt);
            }
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(stmts)
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.matches(&TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If { condition, then_branch, else_branch },
            span,
        ))
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };

        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Return { span, value }, span))
    }

    /// Parses a `for` loop and desugars it into a `while`.
    ///
    /// `for (init; cond; incr) body` becomes:
    ///
    /// ```text
    /// {
    ///     init;
    ///     while (cond) {
    ///         body;
    ///         incr;
    ///     }
    /// }
    /// ```
    ///
    /// with a missing `cond` treated as `true` and a missing `init`/`incr`
    /// simply omitted.
    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.tokens[self.pos - 1].span;
        self.expect(&TokenKind::LeftParen)?;

        let initializer = if self.matches(&TokenKind::Semicolon) {
            None
        } else if self.matches(&TokenKind::Var) {
            Some(self.parse_var_decl()?)
        } else {
            Some(self.parse_expr_stmt()?)
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let increment = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let mut body = self.parse_statement()?;

        if let Some(increment) = increment {
            let increment_span = increment.span;
            body = Stmt::new(
                StmtKind::Block(vec![body, Stmt::new(StmtKind::Expression(increment), increment_span)]),
                span,
            );
        }

        let condition = condition.unwrap_or_else(|| {
            use crate::ast::{ExprKind, Literal};
            crate::ast::Expr::new(self.next_id(), ExprKind::Literal(Literal::Bool(true)), span)
        });

        body = Stmt::new(StmtKind::While { condition, body: Box::new(body) }, span);

        if let Some(initializer) = initializer {
            body = Stmt::new(StmtKind::Block(vec![initializer, body]), span);
        }

        Ok(body)
    }
}
