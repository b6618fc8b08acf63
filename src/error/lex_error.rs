use thiserror::Error;

use crate::error::Anchor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A string literal reached the end of input before its closing quote.
    #[error("{at}: unterminated string: {text}")]
    UnterminatedString {
        /// Where scanning stopped.
        at:   Anchor,
        /// The text of the literal, including its opening quote.
        text: String,
    },
    /// A block comment reached the end of input before its closing `*/`.
    #[error("{at}: unterminated block comment")]
    UnterminatedBlockComment {
        /// Where scanning stopped.
        at: Anchor,
    },
    /// A `*/` appeared with no open block comment.
    #[error("{at}: found block comment without matching /*")]
    UnmatchedCommentClose {
        /// The stray `*/`.
        at: Anchor,
    },
    /// An identifier ran straight into a `"`, which means a string literal is
    /// missing its opening quote.
    #[error("{at}: string missing opening quote: {text}")]
    MissingOpeningQuote {
        /// The identifier and the quote that follows it.
        at:   Anchor,
        /// The scanned text, up to and including the quote.
        text: String,
    },
    /// A character that starts no token.
    #[error("{at}: unexpected character")]
    UnexpectedCharacter {
        /// The offending character.
        at: Anchor,
    },
}
