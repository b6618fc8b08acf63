/// Entry point and shared plumbing of the parser.
///
/// Holds the program driver with its error recovery, plus the expression
/// levels that are neither plain binary nor unary: comma, assignment and the
/// ternary conditional.
pub mod core;

/// Left-associative binary operator levels.
///
/// Equality, comparison, additive and multiplicative expressions, all built
/// by one shared folding helper.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles prefix operators, literals, grouping, variable references and the
/// error productions for binary operators found where an operand should be.
pub mod unary;

/// Block parsing.
///
/// Parses the declarations between `{` and the matching `}`.
pub mod block;

/// Token stream helpers shared by every parsing level.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations and the `print`, block and expression statements.
pub mod statement;
