use logos::{FilterResult, Lexer, Logos};
use tracing::{debug, trace};

use crate::{
    error::{Anchor, LexError},
    interpreter::token::{Token, TokenKind},
};

/// Represents a raw lexical unit as recognized by the generated scanner.
///
/// Whitespace, newlines and comments are matched here and skipped by their
/// callbacks; everything else is turned into a [`TokenKind`] by
/// [`RawToken::into_kind`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
enum RawToken {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`, unless it closes a block comment that was never opened.
    #[token("*", star)]
    Star,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// String literals such as `"hello"`. May span lines.
    #[token("\"", string)]
    String(String),
    /// Numeric literals such as `42` or `3.14`. A `.` is only part of the
    /// number when a digit follows it.
    #[regex(r"[0-9]+(\.[0-9]+)?", number)]
    Number(f64),
    /// Identifier tokens; variable names such as `x`, `total` or `café`.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", identifier)]
    Identifier(String),
    /// `and`
    #[token("and", keyword)]
    And,
    /// `break`
    #[token("break", keyword)]
    Break,
    /// `class`
    #[token("class", keyword)]
    Class,
    /// `else`
    #[token("else", keyword)]
    Else,
    /// `false`
    #[token("false", keyword)]
    False,
    /// `for`
    #[token("for", keyword)]
    For,
    /// `fun`
    #[token("fun", keyword)]
    Fun,
    /// `if`
    #[token("if", keyword)]
    If,
    /// `nil`
    #[token("nil", keyword)]
    Nil,
    /// `or`
    #[token("or", keyword)]
    Or,
    /// `print`
    #[token("print", keyword)]
    Print,
    /// `return`
    #[token("return", keyword)]
    Return,
    /// `super`
    #[token("super", keyword)]
    Super,
    /// `this`
    #[token("this", keyword)]
    This,
    /// `true`
    #[token("true", keyword)]
    True,
    /// `var`
    #[token("var", keyword)]
    Var,
    /// `while`
    #[token("while", keyword)]
    While,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `/* Block comments. */`, which nest.
    #[token("/*", block_comment)]
    BlockComment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl RawToken {
    /// Converts a raw token into the kind the parser sees.
    ///
    /// Returns `None` for the variants whose callbacks always skip; the
    /// scanner never yields those.
    fn into_kind(self) -> Option<TokenKind> {
        Some(match self {
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::LeftBrace => TokenKind::LeftBrace,
            Self::RightBrace => TokenKind::RightBrace,
            Self::Comma => TokenKind::Comma,
            Self::Dot => TokenKind::Dot,
            Self::Minus => TokenKind::Minus,
            Self::Plus => TokenKind::Plus,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Slash => TokenKind::Slash,
            Self::Star => TokenKind::Star,
            Self::Question => TokenKind::Question,
            Self::Colon => TokenKind::Colon,
            Self::Bang => TokenKind::Bang,
            Self::BangEqual => TokenKind::BangEqual,
            Self::Equal => TokenKind::Equal,
            Self::EqualEqual => TokenKind::EqualEqual,
            Self::Greater => TokenKind::Greater,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Less => TokenKind::Less,
            Self::LessEqual => TokenKind::LessEqual,
            Self::String(text) => TokenKind::String(text),
            Self::Number(value) => TokenKind::Number(value),
            Self::Identifier(name) => TokenKind::Identifier(name),
            Self::And => TokenKind::And,
            Self::Break => TokenKind::Break,
            Self::Class => TokenKind::Class,
            Self::Else => TokenKind::Else,
            Self::False => TokenKind::False,
            Self::For => TokenKind::For,
            Self::Fun => TokenKind::Fun,
            Self::If => TokenKind::If,
            Self::Nil => TokenKind::Nil,
            Self::Or => TokenKind::Or,
            Self::Print => TokenKind::Print,
            Self::Return => TokenKind::Return,
            Self::Super => TokenKind::Super,
            Self::This => TokenKind::This,
            Self::True => TokenKind::True,
            Self::Var => TokenKind::Var,
            Self::While => TokenKind::While,
            Self::Comment | Self::BlockComment | Self::NewLine | Self::Ignored => return None,
        })
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented on every newline, including those inside strings and block
/// comments.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Why the generated scanner rejected the input. Turned into a [`LexError`]
/// once the offending slice and line are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexFailure {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedBlockComment,
    UnmatchedCommentClose,
    MissingOpeningQuote,
}

impl LexFailure {
    fn into_error(self, slice: &str, line: usize) -> LexError {
        match self {
            Self::UnexpectedCharacter => LexError::UnexpectedCharacter { at: Anchor::at(slice,
                                                                                         line) },
            Self::UnterminatedString => LexError::UnterminatedString { at:   Anchor::end(line),
                                                                       text: slice.to_string(), },
            Self::UnterminatedBlockComment => {
                LexError::UnterminatedBlockComment { at: Anchor::end(line) }
            },
            Self::UnmatchedCommentClose => {
                LexError::UnmatchedCommentClose { at: Anchor::at(slice, line) }
            },
            Self::MissingOpeningQuote => LexError::MissingOpeningQuote { at:   Anchor::at(slice,
                                                                                           line),
                                                                         text: slice.to_string(), },
        }
    }
}

/// Scans `source` into tokens.
///
/// The returned sequence always ends with exactly one [`TokenKind::Eof`]
/// token carrying the final line. Scanning stops at the first lexical error;
/// no partial token stream is returned.
///
/// # Errors
/// Returns a [`LexError`] for an unterminated string or block comment, a
/// stray `*/`, an identifier running into a `"`, or a character that starts
/// no token.
///
/// # Example
/// ```
/// use treelox::interpreter::{lexer::scan, token::TokenKind};
///
/// let tokens = scan("var answer = 42;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Identifier("answer".to_string()),
///                 TokenKind::Equal,
///                 TokenKind::Number(42.0),
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(raw) = lexer.next() {
        let line = lexer.extras.line;
        match raw {
            Ok(raw) => {
                if let Some(kind) = raw.into_kind() {
                    let token = Token::new(kind, lexer.slice(), line);
                    trace!(%token, "scanned token");
                    tokens.push(token);
                }
            },
            Err(failure) => {
                let error = failure.into_error(lexer.slice(), line);
                debug!(%error, "scan aborted");
                return Err(error);
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    debug!(count = tokens.len(), "scanned source");
    Ok(tokens)
}

/// Rejects a `*` that is immediately followed by `/`, since no block comment
/// is open at this point.
fn star(lex: &mut Lexer<RawToken>) -> Result<(), LexFailure> {
    if lex.remainder().starts_with('/') {
        lex.bump(1);
        return Err(LexFailure::UnmatchedCommentClose);
    }
    Ok(())
}

/// Scans the rest of a string literal after its opening quote.
///
/// Returns the text between the quotes. Newlines inside the literal advance
/// the line counter.
fn string(lex: &mut Lexer<RawToken>) -> Result<String, LexFailure> {
    let remainder = lex.remainder();

    let Some(close) = remainder.find('"') else {
        lex.extras.line += remainder.matches('\n').count();
        lex.bump(remainder.len());
        return Err(LexFailure::UnterminatedString);
    };

    let contents = &remainder[..close];
    lex.extras.line += contents.matches('\n').count();
    lex.bump(close + 1);
    Ok(contents.to_string())
}

/// Parses a numeric literal from the current token slice.
fn number(lex: &Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Scans an identifier, rejecting one that runs straight into a quote.
fn identifier(lex: &mut Lexer<RawToken>) -> Result<String, LexFailure> {
    reject_trailing_quote(lex)?;
    Ok(lex.slice().to_string())
}

/// Keywords follow the same rule as identifiers: `print"x"` is a string
/// missing its opening quote, not a keyword.
fn keyword(lex: &mut Lexer<RawToken>) -> Result<(), LexFailure> {
    reject_trailing_quote(lex)
}

fn reject_trailing_quote(lex: &mut Lexer<RawToken>) -> Result<(), LexFailure> {
    if lex.remainder().starts_with('"') {
        lex.bump(1);
        return Err(LexFailure::MissingOpeningQuote);
    }
    Ok(())
}

/// Skips a block comment whose opening `/*` was just matched.
///
/// Comments nest: every inner `/*` raises the depth and every `*/` lowers it.
/// The comment ends at the `*/` that takes the depth below zero.
fn block_comment(lex: &mut Lexer<RawToken>) -> FilterResult<(), LexFailure> {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 0usize;
    let mut index = 0;

    while index < bytes.len() {
        match (bytes[index], bytes.get(index + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                index += 2;
            },
            (b'*', Some(b'/')) => {
                index += 2;
                if depth == 0 {
                    lex.bump(index);
                    return FilterResult::Skip;
                }
                depth -= 1;
            },
            (b'\n', _) => {
                lex.extras.line += 1;
                index += 1;
            },
            _ => index += 1,
        }
    }

    lex.bump(bytes.len());
    FilterResult::Error(LexFailure::UnterminatedBlockComment)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).unwrap()
                    .into_iter()
                    .map(|token| token.kind)
                    .collect()
    }

    #[test]
    fn single_and_double_character_operators() {
        assert_eq!(kinds("! != = == > >= < <= ( ) { } , . - + ; / * ? :"),
                   vec![TokenKind::Bang,
                        TokenKind::BangEqual,
                        TokenKind::Equal,
                        TokenKind::EqualEqual,
                        TokenKind::Greater,
                        TokenKind::GreaterEqual,
                        TokenKind::Less,
                        TokenKind::LessEqual,
                        TokenKind::LeftParen,
                        TokenKind::RightParen,
                        TokenKind::LeftBrace,
                        TokenKind::RightBrace,
                        TokenKind::Comma,
                        TokenKind::Dot,
                        TokenKind::Minus,
                        TokenKind::Plus,
                        TokenKind::Semicolon,
                        TokenKind::Slash,
                        TokenKind::Star,
                        TokenKind::Question,
                        TokenKind::Colon,
                        TokenKind::Eof]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("var orchid = nil; print or_else"),
                   vec![TokenKind::Var,
                        TokenKind::Identifier("orchid".to_string()),
                        TokenKind::Equal,
                        TokenKind::Nil,
                        TokenKind::Semicolon,
                        TokenKind::Print,
                        TokenKind::Identifier("or_else".to_string()),
                        TokenKind::Eof]);
    }

    #[test]
    fn identifiers_accept_unicode_letters_and_digits() {
        assert_eq!(kinds("var café = naïve_٣;"),
                   vec![TokenKind::Var,
                        TokenKind::Identifier("café".to_string()),
                        TokenKind::Equal,
                        TokenKind::Identifier("naïve_٣".to_string()),
                        TokenKind::Semicolon,
                        TokenKind::Eof]);
    }

    #[test]
    fn numbers_need_a_digit_after_the_point() {
        assert_eq!(kinds("2.75 1. .5"),
                   vec![TokenKind::Number(2.75),
                        TokenKind::Number(1.0),
                        TokenKind::Dot,
                        TokenKind::Dot,
                        TokenKind::Number(5.0),
                        TokenKind::Eof]);
    }

    #[test]
    fn strings_keep_their_quotes_in_the_lexeme() {
        let tokens = scan("\"hello\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String("hello".to_string()));
        assert_eq!(tokens[0].lexeme, "\"hello\"");
    }

    #[test]
    fn lines_advance_inside_strings_and_comments() {
        let tokens = scan("a\n\"b\nc\"\n/* d\n/* e */\n*/ f // g\nh").unwrap();
        let lines: Vec<_> = tokens.iter().map(|token| token.line).collect();
        assert_eq!(lines, vec![1, 3, 6, 7, 7]);
    }

    #[test]
    fn nested_block_comments_are_skipped() {
        assert_eq!(kinds("1 /* outer /* inner */ still outer */ 2"),
                   vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]);
    }

    #[test]
    fn unterminated_string_reports_the_scanned_text() {
        let error = scan("\"abc").unwrap_err();
        assert_eq!(error,
                   LexError::UnterminatedString { at:   Anchor::end(1),
                                                  text: "\"abc".to_string(), });
        assert_eq!(error.to_string(), "[line 1]: Error at end: unterminated string: \"abc");
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let error = scan("/* one /* two */\n").unwrap_err();
        assert_eq!(error, LexError::UnterminatedBlockComment { at: Anchor::end(2) });
    }

    #[test]
    fn stray_comment_close_is_an_error() {
        let error = scan("1 */ 2").unwrap_err();
        assert_eq!(error, LexError::UnmatchedCommentClose { at: Anchor::at("*/", 1) });
    }

    #[test]
    fn identifier_followed_by_quote_is_an_error() {
        let error = scan("print abc\";").unwrap_err();
        assert_eq!(error.to_string(),
                   "[line 1]: Error at 'abc\"': string missing opening quote: abc\"");
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let error = scan("var a = 1;\n@").unwrap_err();
        assert_eq!(error, LexError::UnexpectedCharacter { at: Anchor::at("@", 2) });
    }

    #[test]
    fn eof_carries_the_final_line() {
        let tokens = scan("\n\n").unwrap();
        assert_eq!(tokens, vec![Token::eof(3)]);
    }
}
