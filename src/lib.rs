//! The Lox tree-walking interpreter library.
//!
//! This library provides the core pipeline of the Lox interpreter: lexical
//! analysis, parsing, static scope resolution, and AST evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Recursive descent parser
//! - [`resolver`] - Static scope-distance resolution
//! - [`interpreter`] - Tree-walking evaluator
//!
//! # Example
//!
//! ```
//! use lox::lexer::Lexer;
//! use lox::parser::Parser;
//! use lox::resolver;
//! use lox::interpreter::Interpreter;
//!
//! let source = r#"print "Hello, World!";"#;
//!
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize().expect("Lexer error");
//!
//! let parser = Parser::new(tokens);
//! let statements = parser.parse().expect("Parse error");
//!
//! let locals = resolver::resolve(&statements).expect("Resolve error");
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.set_locals(locals);
//! interpreter.interpret(&statements).expect("Runtime error");
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod token;
