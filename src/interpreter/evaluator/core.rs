use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
    stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes parsed programs.
///
/// An `Interpreter` owns the global environment and the sink that `print`
/// writes to. Variables defined by one call to [`Interpreter::interpret`]
/// remain visible to later calls on the same instance, which is what a REPL
/// session needs. Independent instances share nothing.
///
/// ## Usage
///
/// ```
/// use treelox::{interpreter::evaluator::core::Interpreter, parse, scan};
///
/// let mut interpreter = Interpreter::new(Vec::new());
///
/// let program = parse(&scan("var a = 1; print a + 2;").unwrap()).unwrap();
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(interpreter.into_output(), b"3\n");
/// ```
#[derive(Debug)]
pub struct Interpreter<W> {
    pub(super) environment: Environment,
    out:                    W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global environment that prints to
    /// `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// Executes `statements` in order.
    ///
    /// Execution stops at the first runtime error. Effects of the statements
    /// before it, such as output already written or variables already
    /// defined, are kept.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised.
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.execute(statement))
                  .inspect_err(|error| debug!(%error, "execution aborted"))
    }

    /// Executes a single statement.
    ///
    /// - Expression statements are evaluated and their value discarded.
    /// - `print` writes the value's text and a newline to the sink.
    /// - A variable declaration defines the name in the current scope, as
    ///   `nil` when there is no initializer.
    /// - A block runs its statements in a fresh child scope.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        trace!(line = statement.line_number(), "executing statement");
        ensure_sufficient_stack(|| match statement {
            Stmt::Expression { expr, .. } => {
                self.evaluate(expr)?;
                Ok(())
            },
            Stmt::Print { expr, .. } => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{value}")?;
                Ok(())
            },
            Stmt::VariableDeclaration { name, initializer, .. } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(name, value);
                Ok(())
            },
            Stmt::Block { statements, .. } => self.eval_block(statements),
        })
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right. Of the two branches of a conditional, only
    /// the selected one is evaluated.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value the expression produces.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.evaluate(expr),
            Expr::Unary { op, expr, line } => {
                let value = self.evaluate(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            },
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                self.eval_assign(name, value, *line)
            },
        })
    }

    /// The environment holding every variable defined so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{parse, scan};

    fn interpret(source: &str) -> (Interpreter<Vec<u8>>, EvalResult<()>) {
        let program = parse(&scan(source).unwrap()).unwrap();
        let mut interpreter = Interpreter::new(Vec::new());
        let result = interpreter.interpret(&program);
        (interpreter, result)
    }

    fn output(interpreter: Interpreter<Vec<u8>>) -> String {
        String::from_utf8(interpreter.into_output()).unwrap()
    }

    #[test]
    fn prints_each_value_on_its_own_line() {
        let (interpreter, result) = interpret("print 1; print \"two\"; print nil; print !nil;");

        assert!(result.is_ok());
        assert_eq!(output(interpreter), "1\ntwo\nnil\ntrue\n");
    }

    #[test]
    fn declarations_default_to_nil() {
        let (interpreter, result) = interpret("var a;");

        assert!(result.is_ok());
        assert_eq!(interpreter.environment().get("a"), Some(&Value::Nil));
    }

    #[test]
    fn stops_at_the_first_runtime_error() {
        let (interpreter, result) = interpret("print 1; print -\"x\"; print 2;");

        assert_eq!(result.unwrap_err().to_string(),
                   "[line 1]: Error at '-': Operand must be a number");
        assert_eq!(output(interpreter), "1\n");
    }

    #[test]
    fn conditional_evaluates_only_the_selected_branch() {
        let (interpreter, result) = interpret("var a = 0; true ? (a = 1) : (a = 2); print a;");

        assert!(result.is_ok());
        assert_eq!(output(interpreter), "1\n");
    }

    #[test]
    fn comma_yields_the_right_operand_after_evaluating_both() {
        let (interpreter, result) = interpret("var a; print (a = 1, a + 1); print a;");

        assert!(result.is_ok());
        assert_eq!(output(interpreter), "2\n1\n");
    }

    #[test]
    fn assignment_yields_the_assigned_value() {
        let (interpreter, result) = interpret("var a; var b; print a = b = 3; print b;");

        assert!(result.is_ok());
        assert_eq!(output(interpreter), "3\n3\n");
    }

    #[test]
    fn long_operator_chains_evaluate() {
        let source = format!("print 0{};", " + 1".repeat(5_000));
        let (interpreter, result) = interpret(&source);

        assert!(result.is_ok());
        assert_eq!(output(interpreter), "5000\n");
    }

    #[test]
    fn state_persists_across_calls() {
        let mut interpreter = Interpreter::new(Vec::new());
        let first = parse(&scan("var a = 1;").unwrap()).unwrap();
        let second = parse(&scan("print a;").unwrap()).unwrap();

        interpreter.interpret(&first).unwrap();
        interpreter.interpret(&second).unwrap();

        assert_eq!(interpreter.output(), b"1\n");
    }
}
