//! Lowering of expression trees into the wire format.

use log::trace;

use crate::expression::error::ExpressionResult;
use crate::expression::expr::{ColumnRef, Expression, ScalarFunction, SortOrder};
use crate::expression::literal::{Literal, LiteralValue};
use crate::proto;
use crate::session::RemoteSession;

/// Conversion of an expression node into its wire representation.
///
/// The session is passed through every call so that node kinds needing
/// session state can lower under the same signature. None of the current
/// node kinds read it. A failure anywhere in the tree fails the whole call.
pub trait ToPlan {
    fn to_plan(&self, session: Option<&RemoteSession>) -> ExpressionResult<proto::Expression>;
}

impl ToPlan for ColumnRef {
    fn to_plan(&self, _session: Option<&RemoteSession>) -> ExpressionResult<proto::Expression> {
        Ok(proto::Expression::from_attribute(self.name()))
    }
}

impl ToPlan for Literal {
    fn to_plan(&self, _session: Option<&RemoteSession>) -> ExpressionResult<proto::Expression> {
        let literal_type = match self.value() {
            LiteralValue::Int32(i) => proto::LiteralType::I32(*i),
            LiteralValue::Utf8(s) => proto::LiteralType::String(s.clone()),
            LiteralValue::Float64(x) => proto::LiteralType::Fp64(*x),
        };
        Ok(proto::Expression::from_literal(literal_type))
    }
}

impl ToPlan for ScalarFunction {
    fn to_plan(&self, session: Option<&RemoteSession>) -> ExpressionResult<proto::Expression> {
        let arguments = self
            .args()
            .iter()
            .map(|arg| arg.to_plan(session))
            .collect::<ExpressionResult<Vec<_>>>()?;
        Ok(proto::Expression::from_function(self.op(), arguments))
    }
}

impl ToPlan for SortOrder {
    // Direction and null ordering are not part of the attribute node.
    fn to_plan(&self, session: Option<&RemoteSession>) -> ExpressionResult<proto::Expression> {
        self.target().to_plan(session)
    }
}

impl ToPlan for Expression {
    fn to_plan(&self, session: Option<&RemoteSession>) -> ExpressionResult<proto::Expression> {
        trace!("lowering {}", self);
        match self {
            Expression::Column(col) => col.to_plan(session),
            Expression::Literal(lit) => lit.to_plan(session),
            Expression::ScalarFunction(fun) => fun.to_plan(session),
            Expression::SortOrder(order) => order.to_plan(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::LiteralType;

    #[test]
    fn test_lower_column() {
        let plan = ColumnRef::new("t.x").to_plan(None).unwrap();
        assert_eq!(plan, proto::Expression::from_attribute("t.x"));
    }

    #[test]
    fn test_lower_literals() {
        let plan = Literal::int32(3).to_plan(None).unwrap();
        assert_eq!(plan.literal().and_then(|l| l.i32()), Some(3));

        let plan = Literal::string("x").to_plan(None).unwrap();
        assert_eq!(plan.literal().and_then(|l| l.string()), Some("x"));

        let plan = Literal::float64(1.5).to_plan(None).unwrap();
        assert_eq!(plan.literal().and_then(|l| l.fp64()), Some(1.5));
    }

    #[test]
    fn test_lower_function() {
        let expr = Expression::function(
            ">",
            vec![Expression::column("x"), Expression::literal(1)],
        );
        let plan = expr.to_plan(None).unwrap();
        assert_eq!(
            plan,
            proto::Expression::from_function(
                ">",
                vec![
                    proto::Expression::from_attribute("x"),
                    proto::Expression::from_literal(LiteralType::I32(1)),
                ],
            )
        );
    }

    #[test]
    fn test_lower_empty_function() {
        let plan = Expression::function("now", vec![]).to_plan(None).unwrap();
        let fun = plan.unresolved_function().unwrap();
        assert_eq!(fun.parts, vec!["now".to_string()]);
        assert!(fun.arguments.is_empty());
    }

    #[test]
    fn test_lower_sort_order_ignores_direction() {
        let column = ColumnRef::new("x").to_plan(None).unwrap();
        for order in [
            ColumnRef::new("x").asc(),
            ColumnRef::new("x").desc(),
            SortOrder::new(ColumnRef::new("x"), false, false),
        ] {
            assert_eq!(order.to_plan(None).unwrap(), column);
        }
    }

    #[test]
    fn test_lower_with_session() {
        let session = RemoteSession::default();
        let expr = ColumnRef::new("a") + 1;
        assert_eq!(
            expr.to_plan(Some(&session)).unwrap(),
            expr.to_plan(None).unwrap()
        );
    }
}
