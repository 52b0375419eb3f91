//! Expression AST definitions.

use std::fmt;

use crate::expression::error::ExpressionResult;
use crate::expression::literal::Literal;
use crate::value::Value;

/// Reference to a column by its qualified name.
///
/// The column is not checked for existence; the remote engine resolves it.
/// Two references are identical when their qualified names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    unparsed_identifier: String,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            unparsed_identifier: name.into(),
        }
    }

    pub fn from_qualified_name(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    /// Qualified name of the column
    pub fn name(&self) -> &str {
        &self.unparsed_identifier
    }

    /// Ascending sort on this column, nulls last
    pub fn asc(self) -> SortOrder {
        SortOrder::new(self, true, true)
    }

    /// Descending sort on this column, nulls last
    pub fn desc(self) -> SortOrder {
        SortOrder::new(self, false, true)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column({})", self.unparsed_identifier)
    }
}

/// Named operator applied to an ordered list of arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarFunction {
    op: String,
    args: Vec<Expression>,
}

impl ScalarFunction {
    pub fn new(op: impl Into<String>, args: Vec<Expression>) -> Self {
        Self {
            op: op.into(),
            args,
        }
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    /// Arguments in positional order
    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

impl fmt::Display for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} (", self.op)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, "))")
    }
}

/// Sort specification over a column.
///
/// `ascending` and `nulls_last` only describe the ordering; lowering a sort
/// order yields the wire form of its column and carries neither flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortOrder {
    target: ColumnRef,
    ascending: bool,
    nulls_last: bool,
}

impl SortOrder {
    pub fn new(target: ColumnRef, ascending: bool, nulls_last: bool) -> Self {
        Self {
            target,
            ascending,
            nulls_last,
        }
    }

    pub fn target(&self) -> &ColumnRef {
        &self.target
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn nulls_last(&self) -> bool {
        self.nulls_last
    }
}

impl From<ColumnRef> for SortOrder {
    fn from(target: ColumnRef) -> Self {
        SortOrder::new(target, true, true)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.ascending { "ASC" } else { "DESC" };
        write!(f, "{} {}", self.target, direction)
    }
}

/// Expression tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Unresolved column reference
    Column(ColumnRef),

    /// Literal constant value
    Literal(Literal),

    /// Operator applied to child expressions
    ScalarFunction(ScalarFunction),

    /// Column decorated with ordering metadata
    SortOrder(SortOrder),
}

impl Expression {
    /// Create a column reference expression
    pub fn column(name: impl Into<String>) -> Self {
        Expression::Column(ColumnRef::new(name))
    }

    /// Create a literal expression
    pub fn literal(literal: impl Into<Literal>) -> Self {
        Expression::Literal(literal.into())
    }

    /// Create a literal expression from a dynamically typed value
    pub fn try_lit(value: Value) -> ExpressionResult<Self> {
        Literal::try_from_value(value).map(Expression::Literal)
    }

    /// Create a function expression over `args`
    pub fn function(op: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::ScalarFunction(ScalarFunction::new(op, args))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Column(col) => write!(f, "{}", col),
            Expression::Literal(lit) => write!(f, "{}", lit),
            Expression::ScalarFunction(fun) => write!(f, "{}", fun),
            Expression::SortOrder(order) => write!(f, "{}", order),
        }
    }
}

impl From<ColumnRef> for Expression {
    fn from(col: ColumnRef) -> Self {
        Expression::Column(col)
    }
}

impl From<Literal> for Expression {
    fn from(lit: Literal) -> Self {
        Expression::Literal(lit)
    }
}

impl From<ScalarFunction> for Expression {
    fn from(fun: ScalarFunction) -> Self {
        Expression::ScalarFunction(fun)
    }
}

impl From<SortOrder> for Expression {
    fn from(order: SortOrder) -> Self {
        Expression::SortOrder(order)
    }
}

// Lifting of native primitives

impl From<i32> for Expression {
    fn from(val: i32) -> Self {
        Expression::Literal(Literal::int32(val))
    }
}

impl From<f64> for Expression {
    fn from(val: f64) -> Self {
        Expression::Literal(Literal::float64(val))
    }
}

impl From<&str> for Expression {
    fn from(val: &str) -> Self {
        Expression::Literal(Literal::string(val))
    }
}

impl From<String> for Expression {
    fn from(val: String) -> Self {
        Expression::Literal(Literal::string(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::error::ExpressionError;
    use std::collections::HashSet;

    #[test]
    fn test_column_ref() {
        let col = ColumnRef::from_qualified_name("db.t.age");
        assert_eq!(col.name(), "db.t.age");
        assert_eq!(col, ColumnRef::new("db.t.age"));
        assert_ne!(col, ColumnRef::new("age"));

        let mut set = HashSet::new();
        set.insert(ColumnRef::new("a"));
        set.insert(ColumnRef::new("a"));
        set.insert(ColumnRef::new("b"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sort_order() {
        let desc = ColumnRef::new("x").desc();
        assert!(!desc.is_ascending());
        assert!(desc.nulls_last());
        assert_eq!(desc.target().name(), "x");

        let asc = ColumnRef::new("x").asc();
        assert!(asc.is_ascending());
        assert!(asc.nulls_last());

        let explicit = SortOrder::new(ColumnRef::new("x"), true, false);
        assert!(!explicit.nulls_last());

        let default = SortOrder::from(ColumnRef::new("x"));
        assert_eq!(default, asc);
    }

    #[test]
    fn test_lifting() {
        assert_eq!(Expression::from(3), Expression::Literal(Literal::int32(3)));
        assert_eq!(
            Expression::from("x"),
            Expression::Literal(Literal::string("x"))
        );
        assert_eq!(
            Expression::from(1.5),
            Expression::Literal(Literal::float64(1.5))
        );
        assert_eq!(
            Expression::try_lit(Value::Int32(7)).unwrap(),
            Expression::literal(7)
        );
        assert_eq!(
            Expression::try_lit(Value::Boolean(false)).unwrap_err(),
            ExpressionError::unsupported_literal("Boolean")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Expression::column("x").to_string(), "Column(x)");
        assert_eq!(Expression::literal(5).to_string(), "Literal(5)");

        let fun = Expression::function(
            "+",
            vec![Expression::column("a"), Expression::literal(1)],
        );
        assert_eq!(fun.to_string(), "(+ (Column(a), Literal(1)))");

        let nested = Expression::function("*", vec![fun, Expression::column("c")]);
        assert_eq!(
            nested.to_string(),
            "(* ((+ (Column(a), Literal(1))), Column(c)))"
        );

        assert_eq!(ColumnRef::new("x").asc().to_string(), "Column(x) ASC");
        assert_eq!(
            Expression::from(ColumnRef::new("x").desc()).to_string(),
            "Column(x) DESC"
        );
    }
}
