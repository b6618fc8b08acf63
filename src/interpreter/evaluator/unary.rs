use crate::{
    ast::UnaryOperator,
    error::{Anchor, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W> Interpreter<W> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Only numbers can be negated.
    /// - `Not`: negated truthiness. Accepts any value.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number of the operator, for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use std::io::Sink;
    ///
    /// use treelox::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::<Sink>::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1);
    /// assert_eq!(v.unwrap(), Value::Number(-5.0));
    ///
    /// let v = Interpreter::<Sink>::eval_unary(UnaryOperator::Not, &Value::Number(0.0), 1);
    /// assert_eq!(v.unwrap(), Value::Bool(false));
    ///
    /// assert!(Interpreter::<Sink>::eval_unary(UnaryOperator::Negate, &Value::Nil, 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandMustBeNumber { at: Anchor::at(op.to_string(),
                                                                            line) }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Sink;

    use super::*;

    type Eval = Interpreter<Sink>;

    #[test]
    fn negation_requires_a_number() {
        let error = Eval::eval_unary(UnaryOperator::Negate, &Value::from("1"), 4).unwrap_err();

        assert_eq!(error.to_string(), "[line 4]: Error at '-': Operand must be a number");
    }

    #[test]
    fn not_uses_truthiness() {
        assert_eq!(Eval::eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap(),
                   Value::Bool(true));
        assert_eq!(Eval::eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap(),
                   Value::Bool(false));
    }
}
