//! The Lox interpreter CLI.
//!
//! This binary accepts zero or one positional argument: zero starts a REPL,
//! one treats the argument as a source file path to run once. Anything else
//! (more than one argument, or an argument clap otherwise can't place as
//! the single positional) is rejected with the fixed usage string the
//! external interface contract specifies, rather than clap's own generated
//! usage text.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the Lox interpreter.
#[derive(Parser)]
#[command(name = "lox", about = "A tree-walking interpreter for Lox", long_about = None)]
struct Cli {
    /// Source file to run. Omitted: start an interactive REPL.
    path: Option<String>,
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("Usage: glox [source]");
            std::process::exit(64);
        }
    };

    let exit_code = match cli.path {
        Some(path) => match driver::run_file(&path) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Error: {err}");
                74
            }
        },
        None => match driver::run_repl() {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Error: {err}");
                74
            }
        },
    };

    std::process::exit(exit_code);
}
