/// Operator dispatch, equality and the comma operator.
pub mod core;

/// `+`, `-`, `*` and `/` on numbers.
pub mod arithmetic;

/// `>`, `>=`, `<` and `<=` on numbers.
pub mod comparison;
