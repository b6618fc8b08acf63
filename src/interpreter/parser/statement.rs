use std::iter::Peekable;

use crate::{
    ast::Stmt,
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{advance, current, expect, match_any, parse_identifier},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single declaration.
///
/// A declaration is either a variable declaration or any other statement.
/// This is the unit the program driver recovers at: a declaration that fails
/// to parse is discarded as a whole.
///
/// Grammar: `declaration := var_declaration | statement`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   declaration.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    match match_any(tokens, &[TokenKind::Var]) {
        Some(var) => parse_variable_declaration(tokens, var.line),
        None => parse_statement(tokens),
    }
}

/// Parses a statement.
///
/// A statement is one of:
/// - a print statement, `print <expr> ;`
/// - a block, `{ <declaration>* }`
/// - an expression statement, `<expr> ;`
///
/// # Errors
/// Returns a `ParseError` if the expression fails to parse or the closing
/// `;` or `}` is missing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);
    match token.kind {
        TokenKind::Print => {
            advance(tokens);
            let expr = parse_expression(tokens)?;
            expect(tokens, &TokenKind::Semicolon, "';' after expression")?;
            Ok(Stmt::Print { expr,
                             line: token.line })
        },
        TokenKind::LeftBrace => {
            advance(tokens);
            parse_block(tokens, token.line)
        },
        _ => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &TokenKind::Semicolon, "';' after expression")?;
            Ok(Stmt::Expression { expr,
                                  line: token.line })
        },
    }
}

/// Parses a variable declaration in the form:
///
/// ```text
///     var <identifier> [= <expression>] ;
/// ```
///
/// The `var` keyword has already been consumed.
///
/// # Errors
/// Returns a `ParseError` if the name is missing, the initializer fails to
/// parse, or the closing `;` is missing.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let name = parse_identifier(tokens, "variable name")?;

    let initializer = match match_any(tokens, &[TokenKind::Equal]) {
        Some(_) => Some(parse_expression(tokens)?),
        None => None,
    };

    expect(tokens, &TokenKind::Semicolon, "';' after variable declaration")?;

    Ok(Stmt::VariableDeclaration { name,
                                   initializer,
                                   line })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ast::Expr, error::ParseError, interpreter::lexer::scan};

    fn parse(source: &str) -> ParseResult<Stmt> {
        let tokens = scan(source).unwrap();
        parse_declaration(&mut tokens.iter().peekable())
    }

    #[test]
    fn variable_declaration_without_initializer() {
        assert_eq!(parse("var answer;").unwrap(),
                   Stmt::VariableDeclaration { name:        "answer".into(),
                                               initializer: None,
                                               line:        1, });
    }

    #[test]
    fn variable_declaration_with_initializer() {
        assert_eq!(parse("var a =\n b;").unwrap(),
                   Stmt::VariableDeclaration { name:        "a".into(),
                                               initializer: Some(Expr::Variable { name: "b".into(),
                                                                                  line: 2, }),
                                               line:        1, });
    }

    #[test]
    fn print_and_expression_statements() {
        assert_eq!(parse("print 1;").unwrap().to_string(), "(print 1)\n");
        assert_eq!(parse("a = 1;").unwrap().to_string(), "(set a 1)\n");
    }

    #[test]
    fn missing_semicolons_name_the_statement() {
        assert_eq!(parse("print 1").unwrap_err().to_string(),
                   "[line 1]: Error at end: expected ';' after expression");
        assert_eq!(parse("var a = 1 2").unwrap_err().to_string(),
                   "[line 1]: Error at '2': expected ';' after variable declaration");
    }

    #[test]
    fn variable_name_must_be_an_identifier() {
        assert!(matches!(parse("var 1;"),
                         Err(ParseError::Expected { expected: "variable name", .. })));
    }
}
