//! # treelox
//!
//! treelox is a tree-walking interpreter for a small dynamically-typed
//! language written in Rust. Source text is scanned into tokens, parsed into
//! statements and executed directly from the syntax tree. The language has
//! numbers, strings, booleans and `nil`, arithmetic, comparison and equality,
//! the ternary conditional and comma operators, variables with block scoping,
//! and a `print` statement.
//!
//! ```
//! let mut out = Vec::new();
//! treelox::run("var a = 1; { var a = a + 1; print a; } print a;", &mut out).unwrap();
//!
//! assert_eq!(out, b"2\n1\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    ast::Stmt,
    error::{Error, ParseErrors},
    interpreter::{evaluator::core::Interpreter, parser::core::parse_program, token::Token},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree, plus the
/// printer that renders a tree back as text. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders programs in parenthesized prefix form for debugging.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Every
/// error renders as a single diagnostic naming the line and the offending
/// lexeme, or the end of input: `[line 3]: Error at '+': Operands must be
/// numbers`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and lexemes for context.
/// - Aggregates the syntax errors of one source.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the token model, lexing, parsing, environments,
/// values and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
mod stack;

pub use interpreter::lexer::scan;

/// Parses scanned tokens into a program.
///
/// Syntax errors do not stop parsing: the parser skips ahead to the next
/// statement and continues, and all errors found are returned together.
///
/// # Errors
/// Returns every syntax error in the token stream.
///
/// # Example
/// ```
/// use treelox::{parse, scan};
///
/// let tokens = scan("print 1;\n1 +;\n(2;").unwrap();
/// let errors = parse(&tokens).unwrap_err();
///
/// assert_eq!(errors.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseErrors> {
    parse_program(tokens)
}

/// Scans, parses and executes `source`, writing `print` output to `out`.
///
/// Each call starts from an empty global environment. Use a [`Session`] to
/// keep variables between runs.
///
/// # Errors
/// Returns the lexical error, the collected syntax errors, or the first
/// runtime error. Nothing is executed unless scanning and parsing both
/// succeed.
///
/// # Example
/// ```
/// use treelox::{error::Error, run};
///
/// let mut out = Vec::new();
/// let result = run("print 1; print 1 / 0; print 2;", &mut out);
///
/// assert!(matches!(result, Err(Error::Runtime(_))));
/// assert_eq!(out, b"1\n");
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<(), Error> {
    Session::new(out).run(source)
}

/// A persistent interpreter for running several sources in turn.
///
/// Variables defined by one call to [`Session::run`] are visible to the
/// next, as in a REPL. A failed run leaves the session usable; definitions
/// made before a runtime error are kept.
///
/// # Example
/// ```
/// use treelox::Session;
///
/// let mut session = Session::new(Vec::new());
/// session.run("var greeting = \"hi\";").unwrap();
/// assert!(session.run("print missing;").is_err());
/// session.run("print greeting;").unwrap();
///
/// assert_eq!(session.into_output(), b"hi\n");
/// ```
#[derive(Debug)]
pub struct Session<W> {
    interpreter: Interpreter<W>,
}

impl<W: Write> Session<W> {
    /// Starts a session with an empty global environment.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { interpreter: Interpreter::new(out) }
    }

    /// Scans, parses and executes `source` against the session's
    /// environment.
    ///
    /// # Errors
    /// Returns the lexical error, the collected syntax errors, or the first
    /// runtime error.
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let tokens = scan(source)?;
        let program = parse(&tokens)?;
        debug!(statements = program.len(), "executing program");
        self.interpreter.interpret(&program)?;
        Ok(())
    }

    /// Ends the session and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.interpreter.into_output()
    }
}
