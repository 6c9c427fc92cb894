//! Expression parsing.
//!
//! Implements the Lox expression grammar as a precedence chain, from loosest
//! to tightest binding:
//!
//! ```text
//! expression → assignment
//! assignment → IDENTIFIER "=" assignment | logic_or
//! logic_or   → logic_and ( "or" logic_and )*
//! logic_and  → equality ( "and" equality )*
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | call
//! call       → primary ( "(" arguments? ")" )*
//! arguments  → expression ( "," expression )*
//! primary    → NUMBER | STRING | "true" | "false" | "nil"
//!            | "(" expression ")" | IDENTIFIER
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOp, Expr, ExprKind, Literal, LogicalOp, UnaryOp};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses an expression. Entry point for the whole precedence chain.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or()?;

        if self.matches(&TokenKind::Equal) {
            let equals_span = self.tokens[self.pos - 1].span;
            let value = self.parse_assignment()?;

            return match expr.kind {
                ExprKind::Variable(name) => {
                    let span = Span::new(expr.span.start, value.span.end, expr.span.line, expr.span.column);
                    Ok(Expr::new(
                        self.next_id(),
                        ExprKind::Assign {
                            name,
                            value: Box::new(value),
                        },
                        span,
                    ))
                }
                _ => Err(ParseError {
                    message: "Invalid assignment target.".to_string(),
                    span: equals_span,
                }),
            };
        }

        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        while self.matches(&TokenKind::Or) {
            let right = self.parse_and()?;
            let span = Span::new(left.span.start, right.span.end, left.span.line, left.span.column);
            left = Expr::new(
                self.next_id(),
                ExprKind::Logical {
                    left: Box::new(left),
                    op: LogicalOp::Or,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.matches(&TokenKind::And) {
            let right = self.parse_equality()?;
            let span = Span::new(left.span.start, right.span.end, left.span.line, left.span.column);
            left = Expr::new(
                self.next_id(),
                ExprKind::Logical {
                    left: Box::new(left),
                    op: LogicalOp::And,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::BangEqual => BinaryOp::NotEqual,
                TokenKind::EqualEqual => BinaryOp::Equal,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison()?;
            left = self.binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = self.binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::Minus => BinaryOp::Subtract,
                TokenKind::Plus => BinaryOp::Add,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = self.binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::Slash => BinaryOp::Divide,
                TokenKind::Star => BinaryOp::Multiply,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = self.binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Negate,
            _ => return self.parse_call(),
        };

        let start_span = self.current_span();
        self.advance();
        let right = self.parse_unary()?;
        let span = Span::new(start_span.start, right.span.end, start_span.line, start_span.column);
        Ok(Expr::new(
            self.next_id(),
            ExprKind::Unary { op, right: Box::new(right) },
            span,
        ))
    }

    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.matches(&TokenKind::LeftParen) {
                expr = self.finish_call(expr)?;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                if args.len() >= 255 {
                    self.errors.push(ParseError {
                        message: "Can't have more than 255 arguments.".to_string(),
                        span: self.current_span(),
                    });
                }
                args.push(self.parse_expr()?);
                if !self.matches(&TokenKind::Comma) {
                    break;
                }
            }
        }

        let closing = self.expect(&TokenKind::RightParen)?;
        let span = Span::new(callee.span.start, closing.span.end, callee.span.line, callee.span.column);

        Ok(Expr::new(
            self.next_id(),
            ExprKind::Call { callee: Box::new(callee), args },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind().clone() {
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(self.next_id(), ExprKind::Literal(Literal::Bool(false)), start_span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(self.next_id(), ExprKind::Literal(Literal::Bool(true)), start_span))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::new(self.next_id(), ExprKind::Literal(Literal::Nil), start_span))
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::new(self.next_id(), ExprKind::Literal(Literal::Number(n)), start_span))
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Ok(Expr::new(self.next_id(), ExprKind::Literal(Literal::String(s)), start_span))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::new(self.next_id(), ExprKind::Variable(name), start_span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let closing = self.expect(&TokenKind::RightParen)?;
                let span = Span::new(start_span.start, closing.span.end, start_span.line, start_span.column);
                Ok(Expr::new(self.next_id(), ExprKind::Grouping(Box::new(inner)), span))
            }
            other => Err(ParseError {
                message: format!("Expected expression, found {}.", Self::token_kind_display(&other)),
                span: start_span,
            }),
        }
    }

    fn binary(&mut self, left: Expr, op: BinaryOp, right: Expr) -> Expr {
        let span = Span::new(left.span.start, right.span.end, left.span.line, left.span.column);
        Expr::new(self.next_id(), ExprKind::Binary { left: Box::new(left), op, right: Box::new(right) }, span)
    }
}
