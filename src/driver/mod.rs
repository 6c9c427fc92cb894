//! Drives the interpreter from the CLI: reads a file or runs a REPL.
//!
//! This module is the "external collaborator" the core interpreter is
//! explicitly not responsible for (file I/O, argument parsing, process exit
//! handling). It funnels both entry points — a single file and a REPL
//! session — through the same [`run`] core pipeline, so the four-stage
//! lex/parse/resolve/evaluate pipeline is exercised identically either way.

use std::io::{self, BufRead, Write};

use lox::interpreter::{Interpreter, RuntimeError};
use lox::lexer::{LexError, Lexer};
use lox::parser::{ParseError, Parser};
use lox::resolver::{self, ResolveError};

/// Every way the `run` pipeline can fail, one variant per stage.
///
/// Each stage's errors are collected wholesale (`Vec<_>`) rather than
/// stopping at the first, except [`LoxError::Runtime`], which carries a
/// single error: the evaluator aborts the program at its first runtime
/// error rather than recovering and continuing like the static stages do.
#[derive(Debug)]
pub enum LoxError {
    Lex(Vec<LexError>),
    Parse(Vec<ParseError>),
    Resolve(Vec<ResolveError>),
    Runtime(RuntimeError),
}

impl LoxError {
    /// `true` for a static (lex/parse/resolve) error, `false` for a runtime
    /// one. Used by the driver to choose between the conventional exit
    /// codes 65 and 70.
    pub fn is_static(&self) -> bool {
        !matches!(self, LoxError::Runtime(_))
    }
}

/// Runs one program's worth of source against `interpreter`.
///
/// This is the core entry point `SPEC_FULL.md` describes: lex, parse,
/// resolve, evaluate, short-circuiting at whichever stage first reports an
/// error. `interpreter` is threaded in rather than constructed here so a
/// REPL session can call this once per line while keeping the same globals
/// across calls.
pub fn run(source: &str, interpreter: &mut Interpreter) -> Result<(), LoxError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().map_err(LoxError::Lex)?;

    let parser = Parser::new(tokens);
    let statements = parser.parse().map_err(LoxError::Parse)?;

    let locals = resolver::resolve(&statements).map_err(LoxError::Resolve)?;
    interpreter.set_locals(locals);

    interpreter.interpret(&statements).map_err(LoxError::Runtime)
}

/// Reads `path`, runs it once through [`run`], and reports any error.
///
/// # Returns
///
/// The process exit code: `0` on success, `65` for a static error
/// (lex/parse/resolve), `70` for a runtime error, conventionally.
pub fn run_file(path: &str) -> io::Result<i32> {
    log::debug!("loading source file: {path}");
    let source = std::fs::read_to_string(path)?;

    let mut interpreter = Interpreter::new();
    match run(&source, &mut interpreter) {
        Ok(()) => Ok(0),
        Err(err) => {
            crate::diagnostics::report_error(path, &source, &err);
            Ok(if err.is_static() { 65 } else { 70 })
        }
    }
}

/// The REPL prompt, fixed by the external interface contract.
const PROMPT: &str = "golox~~>  ";

/// The sentinel line that ends a REPL session.
const EXIT_COMMAND: &str = "exit";

/// Runs an interactive read-eval-print loop on stdin/stdout.
///
/// One [`Interpreter`] backs the whole session: a `var` or `fun` declared on
/// one line stays visible to every line after it. A line that fails to lex,
/// parse, resolve, or evaluate reports its error and the loop continues —
/// unlike [`run_file`], a REPL typo shouldn't end the session.
pub fn run_repl() -> io::Result<i32> {
    log::info!("starting REPL session");
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{PROMPT}");
        stdout.flush()?;

        let mut line = String::new();
        let bytes_read = stdin.lock().read_line(&mut line)?;
        if bytes_read == 0 {
            // EOF (e.g. piped input ran out, or Ctrl-D).
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line == EXIT_COMMAND {
            break;
        }
        if line.is_empty() {
            continue;
        }

        if let Err(err) = run(line, &mut interpreter) {
            crate::diagnostics::report_error("<stdin>", line, &err);
        }
    }

    log::info!("ending REPL session");
    Ok(0)
}
