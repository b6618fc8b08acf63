use crate::{
    ast::BinaryOperator,
    error::{Anchor, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W> Interpreter<W> {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator:
    /// - `,` discards the left operand and yields the right one.
    /// - `==` and `!=` compare any two values. Values of different variants
    ///   are never equal.
    /// - Ordering operators use `eval_comparison`.
    /// - Arithmetic operators use `eval_arithmetic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use std::io::Sink;
    ///
    /// use treelox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let result = Interpreter::<Sink>::eval_binary(BinaryOperator::Add,
    ///                                                Value::Number(3.0),
    ///                                                Value::Number(4.0),
    ///                                                1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let result = Interpreter::<Sink>::eval_binary(BinaryOperator::Equal,
    ///                                                Value::Number(1.0),
    ///                                                Value::from("1"),
    ///                                                1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Comma, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Comma => Ok(right),
            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
            Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(op, &left, &right, line)
            },
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, &left, &right, line),
        }
    }

    /// Extracts both operands of a numeric operator.
    ///
    /// # Errors
    /// Returns `RuntimeError::OperandsMustBeNumbers`, anchored at the
    /// operator, when either operand is not a number.
    pub(in crate::interpreter::evaluator) fn numeric_operands(op: BinaryOperator,
                                                              left: &Value,
                                                              right: &Value,
                                                              line: usize)
                                                              -> EvalResult<(f64, f64)> {
        match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => Ok((l, r)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { at: Anchor::at(op.to_string(), line) }),
        }
    }
}
