use thiserror::Error;

use crate::error::Anchor;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Unary `-` was applied to something other than a number.
    #[error("{at}: Operand must be a number")]
    OperandMustBeNumber {
        /// The `-` operator.
        at: Anchor,
    },
    /// An arithmetic or ordering operator got a non-number operand.
    #[error("{at}: Operands must be numbers")]
    OperandsMustBeNumbers {
        /// The operator.
        at: Anchor,
    },
    /// The right operand of `/` was zero.
    #[error("{at}: Dividing by zero")]
    DivisionByZero {
        /// The `/` operator.
        at: Anchor,
    },
    /// A variable was read or assigned before being declared.
    #[error("{at}: Undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The reference or assignment.
        at:   Anchor,
    },
    /// The output sink rejected a `print`.
    #[error("failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}
