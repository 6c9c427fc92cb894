use crate::lexer::Lexer;
use crate::parser::Parser;

#[test]
#[should_panic(expected = "Token list must not be empty")]
fn test_parser_new_panics_on_empty_tokens() {
    Parser::new(Vec::new());
}

#[test]
fn test_parser_accepts_eof_only_input() {
    let mut lexer = Lexer::new("");
    let tokens = lexer.tokenize().unwrap();
    let parser = Parser::new(tokens);
    assert_eq!(parser.parse().unwrap().len(), 0);
}

#[test]
fn test_whitespace_between_tokens_is_insignificant() {
    let a = super::parse("var   x\n=\n1  ;").unwrap();
    let b = super::parse("var x=1;").unwrap();
    assert_eq!(a.len(), b.len());
}
