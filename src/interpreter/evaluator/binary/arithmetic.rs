use crate::{
    ast::BinaryOperator,
    error::{Anchor, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W> Interpreter<W> {
    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// Both operands must be numbers; there is no string concatenation and no
    /// implicit conversion. Results follow IEEE-754 double arithmetic, except
    /// that dividing by exactly zero is an error rather than an infinity or
    /// NaN.
    ///
    /// # Errors
    /// - `OperandsMustBeNumbers` if either operand is not a number.
    /// - `DivisionByZero` if the right operand of `/` is zero.
    pub(in crate::interpreter::evaluator) fn eval_arithmetic(op: BinaryOperator,
                                                             left: &Value,
                                                             right: &Value,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        let (l, r) = Self::numeric_operands(op, left, right, line)?;

        let result = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { at: Anchor::at(op.to_string(),
                                                                             line) });
                }
                l / r
            },
            _ => unreachable!("not an arithmetic operator: {op}"),
        };
        Ok(Value::Number(result))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Sink;

    use super::*;

    type Eval = Interpreter<Sink>;

    fn eval(op: BinaryOperator, l: f64, r: f64) -> EvalResult<Value> {
        Eval::eval_arithmetic(op, &Value::Number(l), &Value::Number(r), 1)
    }

    #[test]
    fn follows_double_arithmetic() {
        assert_eq!(eval(BinaryOperator::Add, 0.1, 0.2).unwrap(), Value::Number(0.1 + 0.2));
        assert_eq!(eval(BinaryOperator::Sub, 1.0, 3.5).unwrap(), Value::Number(-2.5));
        assert_eq!(eval(BinaryOperator::Mul, 4.0, 2.5).unwrap(), Value::Number(10.0));
        assert_eq!(eval(BinaryOperator::Div, 1.0, 4.0).unwrap(), Value::Number(0.25));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(eval(BinaryOperator::Div, 1.0, 0.0).unwrap_err().to_string(),
                   "[line 1]: Error at '/': Dividing by zero");
        assert!(eval(BinaryOperator::Div, 0.0, -0.0).is_err());
    }
}
