use std::{cell::Cell, iter::Peekable};

use crate::{
    error::{Anchor, ParseError},
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
    stack::ensure_sufficient_stack,
};

/// How many groupings, prefix operators, assignments, conditionals and
/// blocks may be open at once.
pub const MAX_NESTING: usize = 256;

thread_local! {
    /// Nesting levels currently open on this thread's parser.
    static NESTING: Cell<usize> = const { Cell::new(0) };
}

/// Stands in for the current token once a stream without a trailing
/// end-of-input marker runs dry.
static END_OF_INPUT: Token = Token::eof(0);

/// Returns the token the parser is looking at without consuming it.
///
/// The end-of-input token is never consumed, so it stays current once
/// reached.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().unwrap_or(&END_OF_INPUT)
}

/// Consumes and returns the current token. At end of input the end-of-input
/// token is returned and left in place.
pub(in crate::interpreter::parser) fn advance<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| !token.is_eof())
          .unwrap_or_else(|| current(tokens))
}

/// Whether the current token is of `kind`.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>, kind: &TokenKind) -> bool
    where I: Iterator<Item = &'a Token>
{
    current(tokens).kind == *kind
}

/// Consumes the current token if its kind is one of `kinds`.
///
/// # Returns
/// The consumed token, or `None` when nothing matched.
pub(in crate::interpreter::parser) fn match_any<'a, I>(tokens: &mut Peekable<I>,
                                                       kinds: &[TokenKind])
                                                       -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| kinds.contains(&token.kind))
}

/// Consumes a token of `kind` or fails naming what was `expected`.
///
/// # Errors
/// Returns `ParseError::Expected` anchored at the current token, or at end of
/// input, when the current token is of another kind.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    expected: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if check(tokens, kind) {
        return Ok(advance(tokens));
    }
    Err(ParseError::Expected { at: Anchor::from(current(tokens)),
                               expected })
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `ParseError::Expected` with `expected` when the current token is
/// not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &'static str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);
    match &token.kind {
        TokenKind::Identifier(name) => {
            advance(tokens);
            Ok(name.clone())
        },
        _ => Err(ParseError::Expected { at: Anchor::from(token),
                                        expected }),
    }
}

/// Runs `parse` one nesting level deeper.
///
/// Every construct that makes the parser recurse into itself goes through
/// here, which bounds the depth of the trees it builds.
///
/// # Errors
/// Returns `ParseError::NestedTooDeeply`, anchored at the current token, when
/// [`MAX_NESTING`] levels are already open. Otherwise returns whatever
/// `parse` returns.
pub(in crate::interpreter::parser) fn nested<'a, I, T>(tokens: &mut Peekable<I>,
                                                       parse: impl FnOnce(&mut Peekable<I>)
                                                             -> ParseResult<T>)
                                                       -> ParseResult<T>
    where I: Iterator<Item = &'a Token>
{
    let depth = NESTING.get();
    if depth >= MAX_NESTING {
        return Err(ParseError::NestedTooDeeply { at: Anchor::from(current(tokens)) });
    }

    NESTING.set(depth + 1);
    let result = ensure_sufficient_stack(|| parse(tokens));
    NESTING.set(depth);
    result
}
