//! Function-call semantics: arity checks, non-callable callees, and return
//! unwinding through nested control flow.

use super::interpret;
use crate::interpreter::Value;

#[test]
fn calling_with_too_few_arguments_is_a_runtime_error() {
    let result = interpret("fun add(a, b) { return a + b; } add(1);");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.message.contains("Expected 2 arguments but got 1"));
}

#[test]
fn calling_with_too_many_arguments_is_a_runtime_error() {
    let result = interpret("fun add(a, b) { return a + b; } add(1, 2, 3);");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.message.contains("Expected 2 arguments but got 3"));
}

#[test]
fn calling_a_non_callable_value_is_a_runtime_error() {
    let result = interpret("var notAFunction = 5; notAFunction();");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.message.contains("Can only call functions and classes"));
}

#[test]
fn return_with_no_value_yields_nil() {
    let mut interpreter = crate::interpreter::Interpreter::new();
    let source = r#"
        fun nothing() { return; }
        var r = nothing();
    "#;
    assert!(super::interpret_with(&mut interpreter, source).is_ok());
    assert_eq!(interpreter.global_value("r"), Some(Value::Nil));
}

#[test]
fn falling_off_the_end_of_a_function_body_yields_nil() {
    let mut interpreter = crate::interpreter::Interpreter::new();
    let source = r#"
        fun nothing() {}
        var r = nothing();
    "#;
    assert!(super::interpret_with(&mut interpreter, source).is_ok());
    assert_eq!(interpreter.global_value("r"), Some(Value::Nil));
}

#[test]
fn return_unwinds_through_nested_blocks_and_if_statements() {
    let mut interpreter = crate::interpreter::Interpreter::new();
    let source = r#"
        fun find(n) {
            {
                {
                    if (n > 0) {
                        return "positive";
                    }
                }
            }
            return "non-positive";
        }
        var r = find(5);
    "#;
    assert!(super::interpret_with(&mut interpreter, source).is_ok());
    assert_eq!(
        interpreter.global_value("r"),
        Some(Value::String(std::rc::Rc::from("positive")))
    );
}

#[test]
fn recursive_function_computes_fibonacci() {
    let mut interpreter = crate::interpreter::Interpreter::new();
    let source = r#"
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        var r = fib(10);
    "#;
    assert!(super::interpret_with(&mut interpreter, source).is_ok());
    assert_eq!(interpreter.global_value("r"), Some(Value::Number(55.0)));
}

#[test]
fn calling_a_class_with_no_constructor_arguments_returns_nil() {
    // LoxClass is name-only in this evaluator: calling it succeeds (arity 0)
    // and produces `nil` rather than an instance.
    let mut interpreter = crate::interpreter::Interpreter::new();
    let source = r#"
        class Foo {}
        var r = Foo();
    "#;
    assert!(super::interpret_with(&mut interpreter, source).is_ok());
    assert_eq!(interpreter.global_value("r"), Some(Value::Nil));
}
