use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::{Anchor, ParseError},
    interpreter::{
        parser::{
            binary::{
                parse_additive, parse_comma, parse_comparison, parse_equality,
                parse_multiplicative,
            },
            core::{ParseResult, parse_expression},
            utils::{advance, current, expect, nested},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);
    let op = match token.kind {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Bang => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };
    advance(tokens);
    let expr = nested(tokens, parse_unary)?;
    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     line: token.line })
}

/// Parses a primary expression.
///
/// Primary expressions are the atoms of the grammar:
/// - `true`, `false` and `nil`
/// - number and string literals
/// - parenthesized expressions
/// - identifiers, as variable references
///
/// A binary operator found here has lost its left-hand operand. Its
/// right-hand operand is still parsed at the operator's own precedence, so
/// that the parser stays in step with the source, before the error is
/// raised.
///
/// # Errors
/// - `ParseError::MissingLeftOperand` at an orphaned binary operator.
/// - `ParseError::Expected` when a `)` is missing.
/// - `ParseError::ExpectedExpression` at any other token.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);
    let line = token.line;
    let value = match &token.kind {
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::Nil => LiteralValue::Nil,
        TokenKind::Number(n) => LiteralValue::Number(*n),
        TokenKind::String(s) => LiteralValue::String(s.clone()),
        TokenKind::Identifier(name) => {
            advance(tokens);
            return Ok(Expr::Variable { name: name.clone(),
                                       line });
        },
        TokenKind::LeftParen => {
            advance(tokens);
            let expr = nested(tokens, parse_expression)?;
            expect(tokens, &TokenKind::RightParen, "')' after expression")?;
            return Ok(Expr::Grouping { expr: Box::new(expr),
                                       line });
        },
        kind => return Err(parse_missing_left_operand(tokens, kind, token)),
    };
    advance(tokens);
    Ok(Expr::Literal { value, line })
}

/// Error productions for binary operators in prefix position.
///
/// Consumes the orphaned operator and its right-hand operand, then reports
/// the operator. Tokens that are not binary operators are reported as
/// `ExpectedExpression` without being consumed.
fn parse_missing_left_operand<'a, I>(tokens: &mut Peekable<I>,
                                     kind: &TokenKind,
                                     token: &Token)
                                     -> ParseError
    where I: Iterator<Item = &'a Token>
{
    let parse_right: fn(&mut Peekable<I>) -> ParseResult<Expr> = match kind {
        TokenKind::Comma => parse_comma,
        TokenKind::EqualEqual | TokenKind::BangEqual => parse_equality,
        TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Less
        | TokenKind::LessEqual => parse_comparison,
        TokenKind::Plus => parse_additive,
        TokenKind::Slash | TokenKind::Star => parse_multiplicative,
        _ => return ParseError::ExpectedExpression { at: Anchor::from(token) },
    };
    advance(tokens);
    if let Err(error) = nested(tokens, parse_right) {
        return error;
    }
    ParseError::MissingLeftOperand { at: Anchor::from(token) }
}
