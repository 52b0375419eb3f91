//! connect-expr - build a column expression and print its wire form

use anyhow::{Context, Result};
use bytes::BytesMut;
use clap::{Parser as ClapParser, ValueEnum};
use connect_expr::expression::{BinaryOperator, ColumnRef, Expression};
use connect_expr::session::{RemoteSession, SessionConfig};
use connect_expr::Value;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl From<Op> for BinaryOperator {
    fn from(op: Op) -> Self {
        match op {
            Op::Gt => BinaryOperator::Gt,
            Op::Lt => BinaryOperator::Lt,
            Op::Ge => BinaryOperator::Ge,
            Op::Le => BinaryOperator::Le,
            Op::Eq => BinaryOperator::Eq,
            Op::Add => BinaryOperator::Add,
            Op::Sub => BinaryOperator::Sub,
            Op::Mul => BinaryOperator::Mul,
            Op::Div => BinaryOperator::Div,
            Op::Mod => BinaryOperator::Mod,
            Op::Pow => BinaryOperator::Pow,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ValueKind {
    Int,
    Float,
    #[value(name = "string")]
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Sort {
    Asc,
    Desc,
}

/// Build `column <op> value` and print its wire form
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Remote connection string
    #[arg(short, long, env = "SPARK_REMOTE")]
    remote: Option<String>,

    /// Qualified column name
    #[arg(short = 'C', long)]
    column: String,

    /// Operator applied to the column
    #[arg(short, long, value_enum)]
    op: Option<Op>,

    /// Other operand
    #[arg(short, long)]
    value: Option<String>,

    /// How to interpret the other operand
    #[arg(short = 'k', long, value_enum, default_value = "int")]
    value_kind: ValueKind,

    /// Put the value on the left of the operator
    #[arg(long)]
    reverse: bool,

    /// Emit a sort order on the column instead of an operation
    #[arg(short, long, value_enum, conflicts_with = "op")]
    sort: Option<Sort>,

    /// Also encode the wire frame
    #[arg(short, long)]
    encode: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_value(raw: &str, kind: ValueKind) -> Result<Value> {
    let value = match kind {
        ValueKind::Int => Value::Int32(
            raw.parse()
                .with_context(|| format!("'{}' is not a 32-bit integer", raw))?,
        ),
        ValueKind::Float => Value::Float64(
            raw.parse()
                .with_context(|| format!("'{}' is not a float", raw))?,
        ),
        ValueKind::Text => Value::String(raw.to_string()),
    };
    Ok(value)
}

fn build_expression(args: &Args) -> Result<Expression> {
    let column = ColumnRef::from_qualified_name(&args.column);

    if let Some(sort) = args.sort {
        let order = match sort {
            Sort::Asc => column.asc(),
            Sort::Desc => column.desc(),
        };
        return Ok(order.into());
    }

    match (args.op, &args.value) {
        (Some(op), Some(raw)) => {
            let other = Expression::try_lit(parse_value(raw, args.value_kind)?)
                .context("Failed to lift value")?;
            Ok(BinaryOperator::from(op).apply(column, other, args.reverse))
        }
        (Some(_), None) => anyhow::bail!("--op requires --value"),
        (None, _) => Ok(column.into()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &args.remote {
        Some(url) => {
            SessionConfig::from_connection_string(url).context("Failed to parse remote")?
        }
        None => SessionConfig::default(),
    };
    log::info!("using remote {}", config);
    let session = RemoteSession::new(config);

    let expr = build_expression(&args)?;
    println!("expression: {}", expr);

    let plan = session.lower(&expr).context("Failed to lower expression")?;
    println!("wire: {:#?}", plan);

    if args.encode {
        let mut buf = BytesMut::new();
        session
            .encode(&expr, &mut buf)
            .context("Failed to encode expression")?;
        println!("frame: {} bytes", buf.len());
    }

    Ok(())
}
