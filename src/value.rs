//! Native runtime values handed to the literal lifter.

use std::fmt;

/// A dynamically typed native value.
///
/// Only [`Value::Int32`], [`Value::String`] and [`Value::Float64`] can be
/// lifted into a literal expression; everything else is rejected when the
/// literal is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Binary(Vec<u8>),
    List(Vec<Value>),
}

impl Value {
    /// Name of the runtime type carried by this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::String(_) => "String",
            Value::Binary(_) => "Binary",
            Value::List(_) => "List",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int32(i) => write!(f, "{}", i),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float32(x) => write!(f, "{:?}", x),
            Value::Float64(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Binary(b) => write!(f, "<{} bytes>", b.len()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int32(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int64(i)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float64(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Binary(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::from(true).type_name(), "Boolean");
        assert_eq!(Value::from(1).type_name(), "Int32");
        assert_eq!(Value::from(1i64).type_name(), "Int64");
        assert_eq!(Value::from(1.5f32).type_name(), "Float32");
        assert_eq!(Value::from(1.5).type_name(), "Float64");
        assert_eq!(Value::from("x").type_name(), "String");
        assert_eq!(Value::from(vec![1u8, 2]).type_name(), "Binary");
        assert_eq!(Value::List(vec![]).type_name(), "List");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int32(42).to_string(), "42");
        assert_eq!(Value::String("abc".into()).to_string(), "abc");
        assert_eq!(Value::Float64(2.0).to_string(), "2.0");
        assert_eq!(Value::Float32(1.5).to_string(), "1.5");
        assert_eq!(
            Value::List(vec![Value::Int32(1), Value::Int32(2)]).to_string(),
            "[1, 2]"
        );
        assert_eq!(Value::Binary(vec![0; 3]).to_string(), "<3 bytes>");
    }
}
