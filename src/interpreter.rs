/// The token model shared by the lexer and the parser.
///
/// Declares [`TokenKind`](token::TokenKind), the closed set of token kinds,
/// and [`Token`](token::Token), which pairs a kind with its lexeme and source
/// line.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   source line.
/// - Skips whitespace, line comments and nestable block comments.
/// - Reports the first lexical error and stops.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of a program. It recovers from syntax errors at statement
/// boundaries so that every error in a source is reported at once.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Encodes operator precedence and associativity.
/// - Validates correct grammar and syntax, reporting errors with location info.
pub mod parser;
/// Variable storage as a chain of nested scopes.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// writes the output of `print` statements to an injected sink.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Creates and discards a scope for every block.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (`nil`, booleans, numbers and strings), its
/// truthiness rule and the text form `print` writes.
pub mod value;
