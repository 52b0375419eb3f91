//! Literal values and the lifting of native values into them.
//!
//! The wire slot of a literal is picked from the native type alone: `i32`
//! goes to the 32-bit integer slot, strings to the string slot and `f64` to
//! the 64-bit float slot. No widening or narrowing is attempted, so an `i64`
//! or a `bool` is rejected rather than coerced.

use std::fmt;

use crate::expression::error::{ExpressionError, ExpressionResult};
use crate::value::Value;

/// The closed set of constants a literal can carry
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int32(i32),
    Utf8(String),
    Float64(f64),
}

impl LiteralValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            LiteralValue::Int32(_) => "Int32",
            LiteralValue::Utf8(_) => "String",
            LiteralValue::Float64(_) => "Float64",
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int32(i) => write!(f, "{}", i),
            LiteralValue::Utf8(s) => write!(f, "{}", s),
            LiteralValue::Float64(x) => write!(f, "{:?}", x),
        }
    }
}

/// Literal constant in an expression
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: LiteralValue,
}

impl Literal {
    pub fn new(value: LiteralValue) -> Self {
        Self { value }
    }

    pub fn int32(val: i32) -> Self {
        Self::new(LiteralValue::Int32(val))
    }

    pub fn string(val: impl Into<String>) -> Self {
        Self::new(LiteralValue::Utf8(val.into()))
    }

    pub fn float64(val: f64) -> Self {
        Self::new(LiteralValue::Float64(val))
    }

    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    /// Lift a dynamically typed value, rejecting anything outside the three
    /// supported kinds
    pub fn try_from_value(value: Value) -> ExpressionResult<Self> {
        match value {
            Value::Int32(i) => Ok(Self::int32(i)),
            Value::String(s) => Ok(Self::string(s)),
            Value::Float64(x) => Ok(Self::float64(x)),
            other => Err(ExpressionError::unsupported_literal(other.type_name())),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({})", self.value)
    }
}

impl From<i32> for Literal {
    fn from(val: i32) -> Self {
        Self::int32(val)
    }
}

impl From<f64> for Literal {
    fn from(val: f64) -> Self {
        Self::float64(val)
    }
}

impl From<&str> for Literal {
    fn from(val: &str) -> Self {
        Self::string(val)
    }
}

impl From<String> for Literal {
    fn from(val: String) -> Self {
        Self::string(val)
    }
}

impl TryFrom<Value> for Literal {
    type Error = ExpressionError;

    fn try_from(value: Value) -> ExpressionResult<Self> {
        Self::try_from_value(value)
    }
}
