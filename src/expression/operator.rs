//! Operator definitions and their binding to Rust operator syntax.
//!
//! Every operator goes through [`BinaryOperator::apply`], which lifts the
//! other operand and orders the two arguments. The std::ops impls and the
//! comparison methods below are thin bindings over it.
//!
//! Comparisons cannot be overloaded in Rust without returning `bool`, so they
//! are exposed as methods (`gt`, `lt`, `ge`, `le`, `eq`). The `eq` method
//! always builds an `==` function node and never compares the trees.

use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::expression::expr::{ColumnRef, Expression, ScalarFunction, SortOrder};
use crate::expression::literal::Literal;

/// Binary operators supported in expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Comparison
    Gt,
    Lt,
    Ge,
    Le,
    Eq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    /// Second spelling of division; lowers exactly like `Div`
    TrueDiv,
    Mod,
    Pow,
}

impl BinaryOperator {
    /// Operator name sent to the remote engine
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Gt => ">",
            BinaryOperator::Lt => "<",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Le => "<=",
            BinaryOperator::Eq => "==",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div | BinaryOperator::TrueDiv => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Pow => "pow",
        }
    }

    /// Build a function node for this operator.
    ///
    /// `other` is lifted into a literal when it is a native primitive; `this`
    /// is taken as is. With `reverse` set the lifted `other` becomes the left
    /// argument, as for `5 + column`.
    pub fn apply(
        self,
        this: impl Into<Expression>,
        other: impl Into<Expression>,
        reverse: bool,
    ) -> Expression {
        let this = this.into();
        let other = other.into();
        let args = if reverse {
            vec![other, this]
        } else {
            vec![this, other]
        };
        Expression::ScalarFunction(ScalarFunction::new(self.as_str(), args))
    }
}

macro_rules! impl_expression_ops {
    ($($ty:ty),* $(,)?) => {$(
        impl<R: Into<Expression>> Add<R> for $ty {
            type Output = Expression;

            fn add(self, rhs: R) -> Expression {
                BinaryOperator::Add.apply(self, rhs, false)
            }
        }

        impl<R: Into<Expression>> Sub<R> for $ty {
            type Output = Expression;

            fn sub(self, rhs: R) -> Expression {
                BinaryOperator::Sub.apply(self, rhs, false)
            }
        }

        impl<R: Into<Expression>> Mul<R> for $ty {
            type Output = Expression;

            fn mul(self, rhs: R) -> Expression {
                BinaryOperator::Mul.apply(self, rhs, false)
            }
        }

        impl<R: Into<Expression>> Div<R> for $ty {
            type Output = Expression;

            fn div(self, rhs: R) -> Expression {
                BinaryOperator::Div.apply(self, rhs, false)
            }
        }

        impl<R: Into<Expression>> Rem<R> for $ty {
            type Output = Expression;

            fn rem(self, rhs: R) -> Expression {
                BinaryOperator::Mod.apply(self, rhs, false)
            }
        }

        #[allow(clippy::should_implement_trait)]
        impl $ty {
            /// `self > other`
            pub fn gt(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::Gt.apply(self, other, false)
            }

            /// `self < other`
            pub fn lt(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::Lt.apply(self, other, false)
            }

            /// `self >= other`
            pub fn ge(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::Ge.apply(self, other, false)
            }

            /// `self <= other`
            pub fn le(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::Le.apply(self, other, false)
            }

            /// `self == other` as an expression node
            pub fn eq(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::Eq.apply(self, other, false)
            }

            /// Alias of `/`
            pub fn true_div(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::TrueDiv.apply(self, other, false)
            }

            /// `self ** other`
            pub fn pow(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::Pow.apply(self, other, false)
            }

            /// `other ** self`
            pub fn rpow(self, other: impl Into<Expression>) -> Expression {
                BinaryOperator::Pow.apply(self, other, true)
            }
        }
    )*};
}

// Native value on the left: the operator is dispatched to the expression on
// the right, so the lifted native becomes the first argument.
macro_rules! impl_reversed_ops {
    ($native:ty => $($ty:ty),* $(,)?) => {$(
        impl Add<$ty> for $native {
            type Output = Expression;

            fn add(self, rhs: $ty) -> Expression {
                BinaryOperator::Add.apply(rhs, self, true)
            }
        }

        impl Sub<$ty> for $native {
            type Output = Expression;

            fn sub(self, rhs: $ty) -> Expression {
                BinaryOperator::Sub.apply(rhs, self, true)
            }
        }

        impl Mul<$ty> for $native {
            type Output = Expression;

            fn mul(self, rhs: $ty) -> Expression {
                BinaryOperator::Mul.apply(rhs, self, true)
            }
        }

        impl Div<$ty> for $native {
            type Output = Expression;

            fn div(self, rhs: $ty) -> Expression {
                BinaryOperator::Div.apply(rhs, self, true)
            }
        }

        impl Rem<$ty> for $native {
            type Output = Expression;

            fn rem(self, rhs: $ty) -> Expression {
                BinaryOperator::Mod.apply(rhs, self, true)
            }
        }
    )*};
}

impl_expression_ops!(Expression, ColumnRef, Literal, ScalarFunction, SortOrder);

impl_reversed_ops!(i32 => Expression, ColumnRef, Literal, ScalarFunction, SortOrder);
impl_reversed_ops!(f64 => Expression, ColumnRef, Literal, ScalarFunction, SortOrder);
impl_reversed_ops!(&str => Expression, ColumnRef, Literal, ScalarFunction, SortOrder);
