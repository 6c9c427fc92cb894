//! Runtime errors (operand type mismatches, arity, undefined variables) and
//! their exit-70 / stderr-reporting conventions.

mod common;
use common::run_script;

#[test]
fn negating_a_string_is_a_runtime_error_exit_70() {
    let result = run_script(r#"-"muffin";"#);
    assert_eq!(result.exit_code, 70);
    assert!(result.stderr.contains("Operand must be a number"));
}

#[test]
fn subtracting_strings_is_a_runtime_error() {
    let result = run_script(r#""a" - "b";"#);
    assert_eq!(result.exit_code, 70);
    assert!(result.stderr.contains("Operands must be numbers"));
}

#[test]
fn adding_a_string_and_a_number_is_a_runtime_error() {
    let result = run_script(r#"print "foo" + 1;"#);
    assert_eq!(result.exit_code, 70);
    assert!(result.stderr.contains("Operands must be either numbers or strings"));
}

#[test]
fn division_by_zero_follows_ieee_754_and_is_not_an_error() {
    let result = run_script("print 1 / 0;");
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "inf\n");
}

#[test]
fn a_runtime_error_stops_execution_at_the_failing_statement() {
    let result = run_script(
        r#"
            print "before";
            print 1 + "two";
            print "after";
        "#,
    );
    assert_eq!(result.exit_code, 70);
    assert_eq!(result.stdout, "before\n");
    assert!(!result.stdout.contains("after"));
}

#[test]
fn runtime_error_message_reports_the_line_it_occurred_on() {
    let result = run_script(
        r#"
            var a = 1;
            var b = 2;
            print a + "oops";
        "#,
    );
    assert_eq!(result.exit_code, 70);
    assert!(result.stderr.contains("line: 4"));
}
