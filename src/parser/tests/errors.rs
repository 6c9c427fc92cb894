use super::parse_errors;

#[test]
fn test_missing_semicolon() {
    let errs = parse_errors("var x = 1");
    assert_eq!(errs.len(), 1);
    assert!(errs[0].message.contains("';'"));
}

#[test]
fn test_invalid_assignment_target() {
    let errs = parse_errors("1 + 2 = 3;");
    assert_eq!(errs.len(), 1);
    assert!(errs[0].message.contains("Invalid assignment target"));
}

#[test]
fn test_unclosed_paren() {
    let errs = parse_errors("print (1 + 2;");
    assert_eq!(errs.len(), 1);
}

#[test]
fn test_recovery_reports_multiple_errors() {
    // Two independently-broken statements should both be reported in one pass.
    let errs = parse_errors("var x = ; var y = ;");
    assert_eq!(errs.len(), 2);
}

#[test]
fn test_synchronize_stops_before_next_declaration_keyword() {
    // The first statement is broken, but the parser should recover in time
    // to parse the `print` statement that follows without a semicolon gap.
    let result = super::parse("var = 1 print 2;");
    assert!(result.is_err());
}

#[test]
fn test_too_many_parameters_is_an_error() {
    let params: Vec<String> = (0..256).map(|n| format!("p{n}")).collect();
    let source = format!("fun f({}) {{}}", params.join(", "));
    let errs = parse_errors(&source);
    assert_eq!(errs.len(), 1);
    assert!(errs[0].message.contains("255 parameters"));
}

#[test]
fn test_too_many_arguments_is_an_error() {
    let args: Vec<String> = (0..256).map(|n| n.to_string()).collect();
    let source = format!("f({});", args.join(", "));
    let errs = parse_errors(&source);
    assert_eq!(errs.len(), 1);
    assert!(errs[0].message.contains("255 arguments"));
}
