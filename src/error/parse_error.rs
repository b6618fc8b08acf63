use thiserror::Error;

use crate::error::Anchor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing one statement.
pub enum ParseError {
    /// A required token such as `;`, `)`, `}` or `:` was not found.
    #[error("{at}: expected {expected}")]
    Expected {
        /// The token found instead.
        at:       Anchor,
        /// What was expected, for example `')' after expression`.
        expected: &'static str,
    },
    /// The left-hand side of `=` is not a variable.
    #[error("{at}: invalid assignment target")]
    InvalidAssignmentTarget {
        /// The `=` token.
        at: Anchor,
    },
    /// A binary operator appeared where an expression should start.
    #[error("{at}: missing left-hand operand")]
    MissingLeftOperand {
        /// The orphaned operator.
        at: Anchor,
    },
    /// A token that cannot start an expression.
    #[error("{at}: expected expression")]
    ExpectedExpression {
        /// The offending token.
        at: Anchor,
    },
    /// Groupings, prefix operators, assignments, conditionals or blocks
    /// opened more than [`MAX_NESTING`] levels deep.
    ///
    /// [`MAX_NESTING`]: crate::interpreter::parser::utils::MAX_NESTING
    #[error("{at}: nested too deeply")]
    NestedTooDeeply {
        /// The token at which the limit was crossed.
        at: Anchor,
    },
}

/// Every syntax error found in one pass over a source.
///
/// The parser recovers after each error and keeps going, so a source with
/// several malformed statements reports all of them together. Displays one
/// diagnostic per line, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.0))]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    /// Wraps the collected errors.
    #[must_use]
    pub const fn new(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }

    /// The number of collected errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no error was collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ParseErrors {
    type IntoIter = std::vec::IntoIter<ParseError>;
    type Item = ParseError;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn render(errors: &[ParseError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
