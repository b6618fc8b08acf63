use std::iter::Peekable;

use crate::{
    ast::Stmt,
    interpreter::{
        parser::{
            core::ParseResult,
            statement::parse_declaration,
            utils::{check, current, expect, nested},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more declarations. Parsing continues until a
/// closing `}` token or the end of input is reached.
///
/// Grammar: `block := "{" declaration* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A `Stmt::Block` containing all parsed declarations.
///
/// # Errors
/// Propagates the first error of any nested declaration, or returns
/// `ParseError::Expected` when the input ends before the closing `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    while !check(tokens, &TokenKind::RightBrace) && !current(tokens).is_eof() {
        statements.push(nested(tokens, parse_declaration)?);
    }

    expect(tokens, &TokenKind::RightBrace, "'}' after block")?;

    Ok(Stmt::Block { statements, line })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{ast::print_program, interpreter::lexer::scan, parse};

    #[test]
    fn nested_blocks() {
        let tokens = scan("{ var a; { print a; } {} }").unwrap();

        assert_eq!(print_program(&parse(&tokens).unwrap()),
                   "{\n. (def a nil)\n. {\n. . (print a)\n. }\n. {\n. }\n}\n");
    }

    #[test]
    fn unclosed_block() {
        let tokens = scan("{ print 1;").unwrap();

        assert_eq!(parse(&tokens).unwrap_err().to_string(),
                   "[line 1]: Error at end: expected '}' after block");
    }
}
