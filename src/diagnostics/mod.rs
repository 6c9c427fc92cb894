//! Renders [`crate::driver::LoxError`] to stderr.
//!
//! Two things are printed for any error that carries a source span: first
//! the bracketed, terminal-agnostic line the external interface contract
//! fixes exactly (`[line: L, column: C] Error: <msg>`, etc.) — this is what
//! a script driving the interpreter and scraping stderr depends on, so it
//! is never skipped — and then, best-effort, a richer `ariadne` report with
//! a caret pointing at the offending span. The `ariadden` report is pure
//! enrichment: if building or printing it fails for any reason, the
//! bracketed line has already gone out and the error is still legible.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use lox::lexer::LexError;
use lox::parser::ParseError;
use lox::resolver::ResolveError;

use crate::driver::LoxError;

fn print_range_report(filename: &str, source: &str, start: usize, end: usize, message: &str) {
    let range = start..end.max(start + 1).min(source.len().max(start + 1));
    let result = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)));

    if let Err(report_err) = result {
        log::debug!("ariadne report failed to render: {report_err}");
    }
}

fn report_lex_errors(filename: &str, source: &str, errors: &[LexError]) {
    for err in errors {
        eprintln!("[line: {}, column: {}] Error: {}", err.span.line, err.span.column, err.message);
        print_range_report(filename, source, err.span.start, err.span.end, &err.message);
    }
}

fn report_parse_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for err in errors {
        eprintln!("[line: {}] Error: {}", err.span.line, err.message);
        print_range_report(filename, source, err.span.start, err.span.end, &err.message);
    }
}

fn report_resolve_errors(filename: &str, source: &str, errors: &[ResolveError]) {
    for err in errors {
        eprintln!("[line: {}] Error: {}", err.span.line, err.message);
        print_range_report(filename, source, err.span.start, err.span.end, &err.message);
    }
}

/// Renders every error in `error` to stderr, in source order where the stage
/// collected more than one.
pub(crate) fn report_error(filename: &str, source: &str, error: &LoxError) {
    match error {
        LoxError::Lex(errors) => report_lex_errors(filename, source, errors),
        LoxError::Parse(errors) => report_parse_errors(filename, source, errors),
        LoxError::Resolve(errors) => report_resolve_errors(filename, source, errors),
        LoxError::Runtime(err) => {
            eprintln!("[line: {}, at {}] Error: {}", err.span.line, err.lexeme, err.message);
            print_range_report(filename, source, err.span.start, err.span.end, &err.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox::token::Span;

    #[test]
    fn test_report_error_does_not_panic_on_lex_errors() {
        let errors = vec![LexError {
            message: "Unexpected character.".to_string(),
            span: Span::new(0, 1, 1, 1),
        }];
        report_error("test.lox", "@", &LoxError::Lex(errors));
    }

    #[test]
    fn test_report_error_does_not_panic_on_runtime_error() {
        use lox::interpreter::RuntimeError;
        let err = RuntimeError::new("Operand must be a number.", Span::new(0, 1, 1, 1), "-");
        report_error("test.lox", "-\"x\";", &LoxError::Runtime(err));
    }
}
