//! Class declarations: name-only semantics, per this core's Non-goals.

mod common;
use common::run_script;

#[test]
fn class_declaration_and_call_succeed_but_produce_nil() {
    let result = run_script(
        r#"
            class Bagel {}
            print Bagel();
        "#,
    );
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "nil\n");
}

#[test]
fn class_with_methods_still_ignores_them_at_call_time() {
    let result = run_script(
        r#"
            class Greeter {
                greet() {
                    print "hello";
                }
            }
            print Greeter();
        "#,
    );
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "nil\n");
}

#[test]
fn class_value_printed_directly_shows_its_name() {
    let result = run_script(
        r#"
            class Bagel {}
            print Bagel;
        "#,
    );
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "<fn Bagel>\n");
}
