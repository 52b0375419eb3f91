//! Expression tree construction and lowering.
//!
//! This module provides:
//! - Expression AST (column references, literals, scalar functions, sort orders)
//! - Lifting of native values into typed literals
//! - Operator syntax that builds function nodes
//! - Lowering of a tree into the remote engine's wire format

pub mod error;
pub mod expr;
pub mod literal;
pub mod lower;
pub mod operator;

pub use error::{ExpressionError, ExpressionResult};
pub use expr::{ColumnRef, Expression, ScalarFunction, SortOrder};
pub use literal::{Literal, LiteralValue};
pub use lower::ToPlan;
pub use operator::BinaryOperator;

/// Column reference by qualified name
pub fn col(name: impl Into<String>) -> ColumnRef {
    ColumnRef::from_qualified_name(name)
}

/// Literal expression from a native primitive
pub fn lit(value: impl Into<Literal>) -> Expression {
    Expression::literal(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers() {
        assert_eq!(col("a").name(), "a");
        assert_eq!(lit(1), Expression::Literal(Literal::int32(1)));
        assert_eq!(lit("s").to_string(), "Literal(s)");
    }
}
