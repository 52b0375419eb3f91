pub mod expression;
pub mod proto;
pub mod session;
pub mod value;

pub use expression::{col, lit, ColumnRef, Expression, ExpressionError, SortOrder, ToPlan};
pub use session::{RemoteSession, SessionConfig};
pub use value::Value;
