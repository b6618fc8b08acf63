use std::iter::{self, Peekable};

use tracing::debug;

use crate::{
    ast::{Expr, Stmt},
    error::{Anchor, ParseError, ParseErrors},
    interpreter::{
        parser::{
            binary::{parse_comma, parse_equality},
            statement::parse_declaration,
            utils::{current, expect, match_any, nested},
        },
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Declarations are parsed one after another until the end of input. A
/// syntax error abandons the declaration it occurred in; the parser then
/// skips to the next statement boundary and carries on, so every independent
/// error in the source is reported in one pass.
///
/// The token slice normally ends with the end-of-input token produced by
/// the lexer. A slice without one is treated as if it had one.
///
/// # Parameters
/// - `tokens`: The scanned tokens.
///
/// # Returns
/// The parsed statements, in source order.
///
/// # Errors
/// Returns every collected [`ParseError`] when at least one declaration
/// failed to parse.
///
/// # Example
/// ```
/// use treelox::{interpreter::parser::core::parse_program, scan};
///
/// let tokens = scan("print 1; print (2;\nvar = 3;").unwrap();
/// let errors = parse_program(&tokens).unwrap_err();
///
/// assert_eq!(errors.to_string(),
///            "[line 1]: Error at ';': expected ')' after expression\n\
///             [line 2]: Error at '=': expected variable name");
/// ```
pub fn parse_program(tokens: &[Token]) -> Result<Vec<Stmt>, ParseErrors> {
    let end = Token::eof(tokens.last().map_or(1, |token| token.line));
    let mut tokens = tokens.iter()
                           .take_while(|token| !token.is_eof())
                           .chain(iter::once(&end))
                           .peekable();

    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while !current(&mut tokens).is_eof() {
        match parse_declaration(&mut tokens) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                debug!(%error, "recovering from syntax error");
                errors.push(error);
                synchronize(&mut tokens);
            },
        }
    }

    debug!(statements = statements.len(), errors = errors.len(), "parsed program");

    if errors.is_empty() {
        Ok(statements)
    } else {
        Err(ParseErrors::new(errors))
    }
}

/// Discards tokens until a statement boundary.
///
/// At least one token is consumed unless the stream is already at its end.
/// Skipping stops right after a `;`, or in front of a keyword that begins a
/// statement.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.next_if(|token| !token.is_eof()) {
        if token.kind == TokenKind::Semicolon || current(tokens).kind.begins_statement() {
            return;
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, the comma operator, and descends through the ladder:
///
/// ```text
///     expression  := comma
///     comma       := assignment ("," assignment)*
///     assignment  := IDENTIFIER "=" assignment | conditional
///     conditional := equality ("?" expression ":" conditional)?
/// ```
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_comma(tokens)
}

/// Parses an assignment.
///
/// The target is parsed as an ordinary conditional expression first. Only
/// when an `=` follows is it checked: a variable reference becomes the
/// target of an `Expr::Assign`, anything else is rejected. Assignment is
/// right-associative, so `a = b = 1` assigns `1` to `b` and then to `a`.
///
/// # Errors
/// Returns `ParseError::InvalidAssignmentTarget`, anchored at the `=`, when
/// the left-hand side is not a variable.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_conditional(tokens)?;

    let Some(equals) = match_any(tokens, &[TokenKind::Equal]) else {
        return Ok(target);
    };
    let value = nested(tokens, parse_assignment)?;

    match target {
        Expr::Variable { name, line } => Ok(Expr::Assign { name,
                                                           value: Box::new(value),
                                                           line }),
        _ => Err(ParseError::InvalidAssignmentTarget { at: Anchor::from(equals) }),
    }
}

/// Parses a ternary conditional, `condition ? then : else`.
///
/// The `then` branch may be any expression, including a comma expression.
/// The `else` branch recurses at this level, which makes the operator
/// right-associative: `a ? b : c ? d : e` groups as `a ? b : (c ? d : e)`.
///
/// # Errors
/// Returns `ParseError::Expected` when the `:` is missing.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let condition = parse_equality(tokens)?;

    let Some(question) = match_any(tokens, &[TokenKind::Question]) else {
        return Ok(condition);
    };
    let then_branch = nested(tokens, parse_expression)?;
    expect(tokens, &TokenKind::Colon, "':' in conditional expression")?;
    let else_branch = nested(tokens, parse_conditional)?;

    Ok(Expr::Conditional { condition:   Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch),
                           line:        question.line, })
}
