//! Example building expressions with operator syntax and lowering them

use connect_expr::expression::{col, lit, ToPlan};
use connect_expr::Value;

fn main() -> anyhow::Result<()> {
    println!("Expression Lowering Demo");
    println!("========================");

    // Example 1: comparisons
    println!("\n1. Comparison");
    println!("-------------");

    let expr1 = col("age").gt(18);
    println!("{}", expr1);
    println!("{:#?}", expr1.to_plan(None)?);

    // Example 2: arithmetic with reversed operands
    println!("\n2. Arithmetic");
    println!("-------------");

    let expr2 = 100 - col("price") * 1.2;
    println!("{}", expr2);
    println!("{:#?}", expr2.to_plan(None)?);

    // Example 3: nesting keeps its shape
    println!("\n3. Nesting");
    println!("----------");

    let expr3 = (col("a") + col("b")).eq(lit("total"));
    println!("{}", expr3);

    // Example 4: lifting dynamic values
    println!("\n4. Lifting");
    println!("----------");

    for value in [Value::Int32(3), Value::Float64(1.5), Value::Boolean(true)] {
        match connect_expr::Expression::try_lit(value.clone()) {
            Ok(expr) => println!("{} -> {}", value, expr),
            Err(e) => println!("{} -> error: {}", value, e),
        }
    }

    Ok(())
}
