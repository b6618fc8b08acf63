use std::fmt::{self, Write as _};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: `nil`, booleans, numbers and strings. It is stored in
/// [`Expr::Literal`] and converted into a runtime value on evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `nil`
    Nil,
    /// `true` or `false`.
    Bool(bool),
    /// A double-precision number literal.
    Number(f64),
    /// A string literal, without its quotes.
    String(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the source line it was parsed from. For operators
/// that is the line of the operator token, which is where runtime errors are
/// anchored. Child nodes are owned by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// An infix operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number of the opening parenthesis.
        line: usize,
    },
    /// The ternary conditional `cond ? then : alt`.
    Conditional {
        /// The condition.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        then_branch: Box<Self>,
        /// Evaluated when the condition is falsy.
        else_branch: Box<Self>,
        /// Line number of the `?`.
        line:        usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable.
    Assign {
        /// Name of the variable being assigned.
        name:  String,
        /// The assigned expression.
        value: Box<Self>,
        /// Line number of the target name.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use treelox::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Grouping { line, .. }
            | Self::Conditional { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. } => *line,
        }
    }
}

/// A statement node.
///
/// A program is an ordered list of statements. Blocks own their nested
/// statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `print <expr>;`
    Print {
        /// The printed expression.
        expr: Expr,
        /// Line number of the `print` keyword.
        line: usize,
    },
    /// `var <name> [= <initializer>];`
    VariableDeclaration {
        /// Name of the declared variable.
        name:        String,
        /// The initializer; the variable starts as `nil` without one.
        initializer: Option<Expr>,
        /// Line number of the `var` keyword.
        line:        usize,
    },
    /// `{ ... }`, which runs its statements in a fresh scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line:       usize,
    },
}

impl Stmt {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Print { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::Block { line, .. } => *line,
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric negation, `-`.
    Negate,
    /// Logical not, `!`.
    Not,
}

/// Infix operators, from lowest to highest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `,`: evaluates both operands and yields the right one.
    Comma,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Not => "!",
                    })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Comma => ",",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                        Self::Greater => ">",
                        Self::GreaterEqual => ">=",
                        Self::Less => "<",
                        Self::LessEqual => "<=",
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                    })
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// Renders the expression in parenthesized prefix form, e.g.
/// `(* (- 123) (45.67))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Grouping { expr, .. } => write!(f, "({expr})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                write!(f, "(if {condition} then {then_branch} else {else_branch})")
            },
            Self::Variable { name, .. } => f.write_str(name),
            Self::Assign { name, value, .. } => write!(f, "(set {name} {value})"),
        }
    }
}

/// Indentation written once per nesting level by the printer.
const INDENT: &str = ". ";

impl Stmt {
    fn write_indented(&self, out: &mut String, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        match self {
            Self::Expression { expr, .. } => writeln!(out, "{indent}{expr}"),
            Self::Print { expr, .. } => writeln!(out, "{indent}(print {expr})"),
            Self::VariableDeclaration { name, initializer, .. } => match initializer {
                Some(value) => writeln!(out, "{indent}(def {name} {value})"),
                None => writeln!(out, "{indent}(def {name} nil)"),
            },
            Self::Block { statements, .. } => {
                writeln!(out, "{indent}{{")?;
                for statement in statements {
                    statement.write_indented(out, depth + 1)?;
                }
                writeln!(out, "{indent}}}")
            },
        }
    }
}

/// Renders the statement followed by a newline. Blocks put each nested
/// statement on its own line, prefixed with `. ` per level of nesting.
impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_indented(&mut out, 0)?;
        f.write_str(&out)
    }
}

/// Renders a whole program with the AST printer, one statement per line.
///
/// # Example
/// ```
/// use treelox::{ast::print_program, parse, scan};
///
/// let tokens = scan("var a = 1; { a = 2; var b = 4; }").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(print_program(&program),
///            "(def a 1)\n{\n. (set a 2)\n. (def b 4)\n}\n");
/// ```
#[must_use]
pub fn print_program(statements: &[Stmt]) -> String {
    statements.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn number(value: f64) -> Box<Expr> {
        Box::new(Expr::Literal { value: value.into(),
                                 line:  1, })
    }

    #[test]
    fn prints_nested_expressions_in_prefix_form() {
        let expr = Expr::Binary { left:  Box::new(Expr::Unary { op:   UnaryOperator::Negate,
                                                                expr: number(123.0),
                                                                line: 1, }),
                                  op:    BinaryOperator::Mul,
                                  right: Box::new(Expr::Grouping { expr: number(45.67),
                                                                   line: 1, }),
                                  line:  1, };

        assert_eq!(expr.to_string(), "(* (- 123) (45.67))");
    }

    #[test]
    fn prints_conditionals_assignments_and_strings() {
        let expr = Expr::Conditional { condition:   Box::new(Expr::Variable { name: "ok".into(),
                                                                              line: 1, }),
                                       then_branch: Box::new(Expr::Literal { value: "yes".into(),
                                                                             line:  1, }),
                                       else_branch: Box::new(Expr::Assign { name:  "x".into(),
                                                                            value: number(2.0),
                                                                            line:  1, }),
                                       line:        1, };

        assert_eq!(expr.to_string(), "(if ok then \"yes\" else (set x 2))");
    }

    #[test]
    fn prints_blocks_with_indentation() {
        let program = vec![Stmt::VariableDeclaration { name:        "a".into(),
                                                       initializer: None,
                                                       line:        1, },
                           Stmt::Block { statements: vec![Stmt::Block { statements:
                                                                            vec![Stmt::Print {
                                                                                expr: *number(1.0),
                                                                                line: 1,
                                                                            }],
                                                                        line:       1, }],
                                         line:       1, }];

        assert_eq!(print_program(&program),
                   "(def a nil)\n{\n. {\n. . (print 1)\n. }\n}\n");
    }
}
