use std::fmt;

use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// The set of variants is closed and there is no implicit coercion between
/// them: operators that need numbers reject anything else, and equality
/// between different variants is always false.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value. Uninitialized variables hold `nil`.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    String(String),
}

impl Value {
    /// Maps the value to a boolean for conditional contexts.
    ///
    /// `nil` and `false` are falsy; every other value, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::String(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the number inside a `Value::Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

/// The text `print` writes: numbers in shortest form (`3`, not `3.0`) and
/// strings without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_never_crosses_variants() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_eq!(Value::Number(1.0), Value::Number(1.0));
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_eq!(Value::from("a"), Value::from("a"));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn display_matches_print_output() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(-0.5).to_string(), "-0.5");
        assert_eq!(Value::from("hi there").to_string(), "hi there");
    }

    #[test]
    fn literals_convert_to_values() {
        assert_eq!(Value::from(&LiteralValue::Nil), Value::Nil);
        assert_eq!(Value::from(&LiteralValue::from(2.5)), Value::Number(2.5));
        assert_eq!(Value::from(&LiteralValue::from("s")), Value::from("s"));
    }
}
