use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::Stmt,
    error::{Anchor, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Resolves a variable reference.
    ///
    /// The name is looked up from the innermost scope outwards.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number of the reference.
    ///
    /// # Returns
    /// A copy of the bound value.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no enclosing scope binds
    /// `name`.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| undefined(name, line))
    }

    /// Assigns an already evaluated value to an existing variable.
    ///
    /// The nearest scope that binds `name` is updated; outer bindings of the
    /// same name are left alone. Assignment never declares a variable.
    ///
    /// # Returns
    /// The assigned value, which is the value of the assignment expression.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no enclosing scope binds
    /// `name`.
    pub fn eval_assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<Value> {
        if self.environment.assign(name, value.clone()) {
            Ok(value)
        } else {
            Err(undefined(name, line))
        }
    }

    /// Executes a block's statements in a new child scope.
    ///
    /// The scope is pushed before the first statement and popped after the
    /// last one, or as soon as a statement fails. Declarations made inside
    /// the block are gone once it returns.
    ///
    /// # Example
    /// ```
    /// use treelox::{interpreter::evaluator::core::Interpreter, parse, scan};
    ///
    /// let program = parse(&scan("var a = 1; { var a = 2; var b = 3; }").unwrap()).unwrap();
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.interpret(&program).unwrap();
    ///
    /// assert_eq!(interpreter.environment().depth(), 1);
    /// assert!(interpreter.environment().get("b").is_none());
    /// ```
    pub fn eval_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.environment.push_scope();
        trace!(depth = self.environment.depth(), "entered block");

        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));

        self.environment.pop_scope();
        debug!(depth = self.environment.depth(), ok = result.is_ok(), "left block");
        result
    }
}

fn undefined(name: &str, line: usize) -> RuntimeError {
    RuntimeError::UndefinedVariable { name: name.to_string(),
                                      at:   Anchor::at(name, line), }
}
