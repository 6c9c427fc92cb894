//! Tree-walking evaluator for the Lox language.
//!
//! This is the last of the four pipeline stages: it walks the AST produced
//! by [`crate::parser`] and annotated by [`crate::resolver`], executing
//! statements for their side effects and evaluating expressions to
//! [`Value`]s.
//!
//! # Module structure
//!
//! - [`environment`] - the name → value chains backing lexical scope
//! - [`value`] - runtime values and the [`Callable`] trait
//! - [`error`] - [`RuntimeError`]
//!
//! # Non-local control flow
//!
//! `return` is modeled as [`Signal::Return`], threaded through the `Ok` side
//! of every statement-execution result alongside [`RuntimeError`] on the
//! `Err` side. [`Interpreter::execute_block`] always restores the saved
//! environment before propagating either a `Signal::Return` or an `Err`
//! upward — an explicit restore-then-return rather than a `Drop` guard, to
//! match this crate's plain `Result`-based error handling elsewhere.
//!
//! # See Also
//!
//! * [`crate::resolver`] - Produces the scope-distance map this module reads
//! * [`crate::ast`] - Defines the tree this module walks

mod environment;
mod error;
mod value;

#[cfg(test)]
mod tests;

pub use environment::{Env, Environment};
pub use error::RuntimeError;
pub use value::{Callable, LoxClass, NativeFunction, UserFunction, Value, values_equal};

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind, UnaryOp};
use crate::token::Span;

/// What a statement did, beyond any side effects it had.
///
/// `Signal::Return` carries a `return` value up through every enclosing
/// `Block`, `If`, and `While` until [`Interpreter::call_function_body`]
/// catches it at the function-call boundary; top-level statements that
/// produce `Signal::Return` (guarded against by the resolver, which rejects
/// `return` outside a function) would otherwise be silently absorbed.
enum Signal {
    Normal,
    Return(Value),
}

type ExecResult = Result<Signal, RuntimeError>;

/// Walks a resolved AST, evaluating it against a chain of environments.
///
/// One `Interpreter` is reused across every line of a REPL session (or the
/// one file of a script run) so that global bindings — `var`s and `fun`s
/// declared at the top level — persist across calls to [`Interpreter::interpret`].
pub struct Interpreter {
    /// The permanent global environment, pre-populated with builtins.
    globals: Env,
    /// The environment currently in scope. Starts out equal to `globals`
    /// and is swapped in and out as blocks and calls are entered and left.
    env: Env,
    /// The scope-distance map produced by [`crate::resolver::resolve`] for
    /// the statements most recently passed to [`Interpreter::interpret`].
    locals: HashMap<u32, usize>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates a fresh interpreter with builtins loaded into its global
    /// environment and no local bindings.
    pub fn new() -> Self {
        let globals = Environment::new_global();
        globals.borrow_mut().define(
            "clock",
            Value::Callable(Rc::new(NativeFunction::clock())),
        );

        let env = Rc::clone(&globals);
        Interpreter {
            globals,
            env,
            locals: HashMap::new(),
        }
    }

    /// Reads a binding straight out of the global environment, bypassing
    /// the resolver entirely. Test-only: lets a test observe the value a
    /// script left behind without needing the script to `print` it and a
    /// subprocess to capture stdout.
    #[cfg(test)]
    pub(crate) fn global_value(&self, name: &str) -> Option<Value> {
        self.globals.borrow().get(name)
    }

    /// Installs a freshly-resolved scope-distance map ahead of a run.
    ///
    /// Each call to the top-level `run` pipeline re-resolves the statements
    /// being executed (the resolver has no reason to remember distances
    /// from a previous REPL line), so the interpreter's copy is replaced
    /// wholesale rather than merged.
    pub fn set_locals(&mut self, locals: HashMap<u32, usize>) {
        self.locals = locals;
    }

    /// Executes a program's top-level statements in order.
    ///
    /// Stops at the first runtime error. Global bindings made before the
    /// error stay defined — `self.env` is always restored back to
    /// `self.globals` by the time this returns, whether execution succeeded
    /// or failed, so a REPL session can keep going on the next line.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            match self.execute_stmt(stmt) {
                Ok(_) => {}
                Err(err) => {
                    self.env = Rc::clone(&self.globals);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Runs a function's body for a call, translating the unwound
    /// [`Signal`] into the value the call expression evaluates to: the
    /// `return`ed value, or `nil` if control fell off the end of the body.
    fn call_function_body(&mut self, body: &[Stmt], call_env: Env) -> Result<Value, RuntimeError> {
        match self.execute_block(body, call_env)? {
            Signal::Return(value) => Ok(value),
            Signal::Normal => Ok(Value::Nil),
        }
    }

    /// Executes `stmts` under `new_env`, always restoring the previously
    /// current environment before returning — on every exit path, including
    /// an early `Signal::Return` or a propagated `RuntimeError`.
    fn execute_block(&mut self, stmts: &[Stmt], new_env: Env) -> ExecResult {
        let previous = std::mem::replace(&mut self.env, new_env);

        let mut result = Ok(Signal::Normal);
        for stmt in stmts {
            match self.execute_stmt(stmt) {
                Ok(Signal::Normal) => {}
                Ok(signal @ Signal::Return(_)) => {
                    result = Ok(signal);
                    break;
                }
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }

        self.env = previous;
        result
    }

    fn execute_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Signal::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{value}");
                Ok(Signal::Normal)
            }
            StmtKind::Var { name, init } => {
                let value = match init {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.borrow_mut().define(name.clone(), value);
                Ok(Signal::Normal)
            }
            StmtKind::Block(stmts) => {
                let new_env = Environment::new_enclosing(&self.env);
                self.execute_block(stmts, new_env)
            }
            StmtKind::If { condition, then_branch, else_branch } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_stmt(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute_stmt(body)? {
                        Signal::Normal => {}
                        signal @ Signal::Return(_) => return Ok(signal),
                    }
                }
                Ok(Signal::Normal)
            }
            StmtKind::Function(decl) => {
                let function = UserFunction::new(Rc::clone(decl), Rc::clone(&self.env));
                self.env
                    .borrow_mut()
                    .define(decl.name.clone(), Value::Callable(Rc::new(function)));
                Ok(Signal::Normal)
            }
            StmtKind::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Signal::Return(value))
            }
            StmtKind::Class { name, .. } => {
                let class = LoxClass { name: name.clone() };
                self.env
                    .borrow_mut()
                    .define(name.clone(), Value::Callable(Rc::new(class)));
                Ok(Signal::Normal)
            }
        }
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from_literal(literal)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary { op, right } => self.eval_unary(*op, right, expr.span),
            ExprKind::Binary { left, op, right } => self.eval_binary(left, *op, right, expr.span),
            ExprKind::Logical { left, op, right } => self.eval_logical(left, *op, right),
            ExprKind::Variable(name) => self.lookup_variable(expr.id, name, expr.span),
            ExprKind::Assign { name, value } => self.eval_assign(expr.id, name, value, expr.span),
            ExprKind::Call { callee, args } => self.eval_call(callee, args, expr.span),
        }
    }

    fn lookup_variable(&self, node_id: u32, name: &str, span: Span) -> Result<Value, RuntimeError> {
        let found = match self.locals.get(&node_id) {
            Some(&distance) => environment::get_at(&self.env, distance, name),
            None => self.globals.borrow().get(name),
        };

        found.ok_or_else(|| RuntimeError::new(format!("Undefined variable '{name}'."), span, name))
    }

    fn eval_assign(
        &mut self,
        node_id: u32,
        name: &str,
        value_expr: &Expr,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        let value = self.evaluate(value_expr)?;

        let assigned = match self.locals.get(&node_id) {
            Some(&distance) => {
                environment::assign_at(&self.env, distance, name, value.clone());
                true
            }
            None => self.globals.borrow_mut().assign(name, value.clone()),
        };

        if assigned {
            Ok(value)
        } else {
            Err(RuntimeError::new(format!("Undefined variable '{name}'."), span, name))
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, right: &Expr, span: Span) -> Result<Value, RuntimeError> {
        let value = self.evaluate(right)?;
        match op {
            UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOp::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(RuntimeError::new(
                    format!("Operand must be a number, got {}.", other.type_name()),
                    span,
                    "-",
                )),
            },
        }
    }

    fn eval_logical(&mut self, left: &Expr, op: crate::ast::LogicalOp, right: &Expr) -> Result<Value, RuntimeError> {
        use crate::ast::LogicalOp;

        let left_val = self.evaluate(left)?;
        match op {
            LogicalOp::Or if left_val.is_truthy() => Ok(left_val),
            LogicalOp::Or => self.evaluate(right),
            LogicalOp::And if !left_val.is_truthy() => Ok(left_val),
            LogicalOp::And => self.evaluate(right),
        }
    }

    fn eval_binary(
        &mut self,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        let left_val = self.evaluate(left)?;
        let right_val = self.evaluate(right)?;
        let lexeme = binary_op_lexeme(op);

        match op {
            BinaryOp::Equal => Ok(Value::Bool(values_equal(&left_val, &right_val))),
            BinaryOp::NotEqual => Ok(Value::Bool(!values_equal(&left_val, &right_val))),
            BinaryOp::Add => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => {
                    Ok(Value::String(Rc::from(format!("{a}{b}"))))
                }
                _ => Err(RuntimeError::new(
                    "Operands must be either numbers or strings.",
                    span,
                    lexeme,
                )),
            },
            BinaryOp::Subtract => numeric_op(left_val, right_val, span, lexeme, |a, b| a - b),
            BinaryOp::Multiply => numeric_op(left_val, right_val, span, lexeme, |a, b| a * b),
            BinaryOp::Divide => numeric_op(left_val, right_val, span, lexeme, |a, b| a / b),
            BinaryOp::Less => numeric_cmp(left_val, right_val, span, lexeme, |a, b| a < b),
            BinaryOp::LessEqual => numeric_cmp(left_val, right_val, span, lexeme, |a, b| a <= b),
            BinaryOp::Greater => numeric_cmp(left_val, right_val, span, lexeme, |a, b| a > b),
            BinaryOp::GreaterEqual => numeric_cmp(left_val, right_val, span, lexeme, |a, b| a >= b),
        }
    }

    fn eval_call(&mut self, callee: &Expr, args: &[Expr], span: Span) -> Result<Value, RuntimeError> {
        let callee_val = self.evaluate(callee)?;

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.evaluate(arg)?);
        }

        let Value::Callable(callable) = callee_val else {
            return Err(RuntimeError::new(
                "Can only call functions and classes.",
                span,
                callee_lexeme(callee),
            ));
        };

        if arg_values.len() != callable.arity() {
            return Err(RuntimeError::new(
                format!(
                    "Expected {} arguments but got {}.",
                    callable.arity(),
                    arg_values.len()
                ),
                span,
                callee_lexeme(callee),
            ));
        }

        callable.call(self, arg_values)
    }
}

/// Best-effort token text for a callee, used only to fill in the `at
/// <lexeme>` slot of a call-related runtime error.
fn callee_lexeme(callee: &Expr) -> &str {
    match &callee.kind {
        ExprKind::Variable(name) => name,
        _ => "",
    }
}

fn binary_op_lexeme(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Multiply => "*",
        BinaryOp::Divide => "/",
        BinaryOp::Equal => "==",
        BinaryOp::NotEqual => "!=",
        BinaryOp::Less => "<",
        BinaryOp::LessEqual => "<=",
        BinaryOp::Greater => ">",
        BinaryOp::GreaterEqual => ">=",
    }
}

fn numeric_op(
    left: Value,
    right: Value,
    span: Span,
    lexeme: &'static str,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
        _ => Err(RuntimeError::new("Operands must be numbers.", span, lexeme)),
    }
}

fn numeric_cmp(
    left: Value,
    right: Value,
    span: Span,
    lexeme: &'static str,
    f: impl Fn(f64, f64) -> bool,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(f(a, b))),
        _ => Err(RuntimeError::new("Operands must be numbers.", span, lexeme)),
    }
}
