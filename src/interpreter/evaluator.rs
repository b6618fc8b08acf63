/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// ordering comparisons, equality and the comma operator.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the statement and expression dispatch, the [`Interpreter`]
/// struct that owns the environment and output sink, and the result type
/// shared by every evaluation routine.
///
/// [`Interpreter`]: core::Interpreter
pub mod core;

/// Utility functions for evaluation.
///
/// Provides variable access and block scoping.
pub mod utils;
