//! Error types for building and lowering expressions.

use thiserror::Error;

/// Errors that can occur while building or lowering an expression tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// Value cannot be represented by any literal slot of the wire format
    #[error("Could not convert literal for type {type_name}")]
    UnsupportedLiteralType { type_name: String },
}

impl ExpressionError {
    pub fn unsupported_literal(type_name: impl Into<String>) -> Self {
        ExpressionError::UnsupportedLiteralType {
            type_name: type_name.into(),
        }
    }
}

/// Result type for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpressionError::unsupported_literal("List");
        assert_eq!(err.to_string(), "Could not convert literal for type List");
        assert_eq!(
            err,
            ExpressionError::UnsupportedLiteralType {
                type_name: "List".to_string()
            }
        );
    }
}
