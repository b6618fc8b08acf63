use std::fmt;

use thiserror::Error;

use crate::interpreter::token::Token;

/// Lexical errors.
///
/// Defines the errors the lexer can raise while turning source text into
/// tokens. Scanning stops at the first one, so a source produces at most one
/// lexical error.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token stream. Parse errors include missing terminators, invalid
/// assignment targets and operators with no left-hand operand. The parser
/// collects every error it recovers from into [`ParseErrors`].
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, division by zero and references to
/// undefined variables. Unlike parse errors, they abort execution.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;

/// The source position a diagnostic points at.
///
/// Every diagnostic names the line it was raised on and either the lexeme of
/// the offending token or the end of input. `Anchor` renders the shared
/// prefix of all diagnostics: `[line N]: Error at 'x'` or
/// `[line N]: Error at end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The 1-based source line.
    pub line:   usize,
    /// The offending lexeme, or `None` at the end of input.
    pub lexeme: Option<String>,
}

impl Anchor {
    /// Anchors a diagnostic at `lexeme` on `line`.
    #[must_use]
    pub fn at(lexeme: impl Into<String>, line: usize) -> Self {
        Self { line,
               lexeme: Some(lexeme.into()) }
    }

    /// Anchors a diagnostic at the end of input on `line`.
    #[must_use]
    pub const fn end(line: usize) -> Self {
        Self { line,
               lexeme: None }
    }
}

impl From<&Token> for Anchor {
    fn from(token: &Token) -> Self {
        if token.is_eof() {
            Self::end(token.line)
        } else {
            Self::at(token.lexeme.as_str(), token.line)
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "[line {}]: Error at '{lexeme}'", self.line),
            None => write!(f, "[line {}]: Error at end", self.line),
        }
    }
}

/// Any failure of the scan, parse and interpret pipeline.
///
/// Each phase has its own error type; this enum is what the whole-pipeline
/// entry points return so callers can tell which phase failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Scanning failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parsing failed with one or more syntax errors.
    #[error(transparent)]
    Parse(#[from] ParseErrors),
    /// Execution stopped on a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
