use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{
            core::{ParseResult, parse_assignment},
            unary::parse_unary,
            utils::{advance, current},
        },
        token::{Token, TokenKind},
    },
};

/// Parses one left-associative binary level.
///
/// Parses an operand with `parse_operand`, then, while the current token is
/// one of `operators`, consumes it, parses the next operand and folds both
/// into a left-leaning `Expr::Binary`. `a - b - c` therefore groups as
/// `(a - b) - c`.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `parse_operand`: Parser for the next higher precedence level.
/// - `operators`: The operators belonging to this level.
///
/// # Returns
/// The folded expression, or the single operand when no operator follows.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_operand(tokens)?;
    loop {
        let token = current(tokens);
        if let Some(op) = token_to_binary_operator(&token.kind)
           && operators.contains(&op)
        {
            advance(tokens);
            let right = parse_operand(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comma expressions.
///
/// The comma operator has the lowest precedence of all. Its operands are
/// assignments.
///
/// The rule is: `comma := assignment ("," assignment)*`
pub fn parse_comma<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, parse_assignment, &[BinaryOperator::Comma])
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_comparison,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses ordering comparisons.
///
/// The rule is: `comparison := additive ((">" | ">=" | "<" | "<=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_additive,
                           &[BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual,
                             BinaryOperator::Less,
                             BinaryOperator::LessEqual])
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, parse_unary, &[BinaryOperator::Mul, BinaryOperator::Div])
}

/// Maps a token kind to the binary operator it spells, if any.
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Comma => Some(BinaryOperator::Comma),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
