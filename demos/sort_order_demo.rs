//! Example showing sort orders and framed wire output

use bytes::BytesMut;
use connect_expr::expression::{col, ColumnRef, SortOrder};
use connect_expr::proto::decode_expression;
use connect_expr::session::RemoteSession;

fn main() -> anyhow::Result<()> {
    let session = RemoteSession::connect("sc://localhost:15002/;user_id=demo")?;

    let orders = vec![
        col("name").asc(),
        col("created_at").desc(),
        SortOrder::new(ColumnRef::new("score"), false, false),
    ];

    let mut buf = BytesMut::new();
    for order in &orders {
        println!(
            "{} (nulls last: {})",
            order,
            order.nulls_last()
        );
        session.encode(order, &mut buf)?;
    }
    println!("encoded {} frames into {} bytes", orders.len(), buf.len());

    // Only the column survives lowering.
    while let Some(expr) = decode_expression(&mut buf)? {
        println!("{:?}", expr.unresolved_attribute());
    }

    Ok(())
}
