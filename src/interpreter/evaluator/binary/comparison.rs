use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W> Interpreter<W> {
    /// Evaluates the ordering operators `>`, `>=`, `<` and `<=`.
    ///
    /// Only numbers are ordered. Any comparison involving NaN is false.
    ///
    /// # Errors
    /// Returns `OperandsMustBeNumbers` if either operand is not a number.
    pub(in crate::interpreter::evaluator) fn eval_comparison(op: BinaryOperator,
                                                             left: &Value,
                                                             right: &Value,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        let (l, r) = Self::numeric_operands(op, left, right, line)?;

        let result = match op {
            BinaryOperator::Greater => l > r,
            BinaryOperator::GreaterEqual => l >= r,
            BinaryOperator::Less => l < r,
            BinaryOperator::LessEqual => l <= r,
            _ => unreachable!("not a comparison operator: {op}"),
        };
        Ok(Value::Bool(result))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Sink;

    use super::*;

    type Eval = Interpreter<Sink>;

    fn compare(op: BinaryOperator, l: f64, r: f64) -> bool {
        Eval::eval_comparison(op, &Value::Number(l), &Value::Number(r), 1).unwrap()
            == Value::Bool(true)
    }

    #[test]
    fn orders_numbers() {
        assert!(compare(BinaryOperator::Greater, 2.0, 1.0));
        assert!(!compare(BinaryOperator::Greater, 1.0, 1.0));
        assert!(compare(BinaryOperator::GreaterEqual, 1.0, 1.0));
        assert!(compare(BinaryOperator::Less, -1.0, 0.0));
        assert!(compare(BinaryOperator::LessEqual, 0.0, -0.0));
        assert!(!compare(BinaryOperator::Less, f64::NAN, 1.0));
    }

    #[test]
    fn strings_are_not_ordered() {
        let error = Eval::eval_comparison(BinaryOperator::Less,
                                          &Value::from("a"),
                                          &Value::from("b"),
                                          2).unwrap_err();

        assert_eq!(error.to_string(), "[line 2]: Error at '<': Operands must be numbers");
    }
}
