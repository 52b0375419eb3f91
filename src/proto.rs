//! Wire representation of expressions understood by the remote engine.
//!
//! The shapes mirror the remote engine's expression message: a node carries
//! exactly one of a literal, an unresolved attribute or an unresolved
//! function. Field names are part of the interop contract and must not change.

pub mod codec;

use serde::{Deserialize, Serialize};

pub use codec::{decode_expression, encode_expression, CodecError, CodecResult, MAX_FRAME_SIZE};

/// A single wire expression node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expression {
    pub expr_type: Option<ExprType>,
}

/// The populated slot of a wire expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprType {
    Literal(Literal),
    UnresolvedAttribute(UnresolvedAttribute),
    UnresolvedFunction(UnresolvedFunction),
}

/// Typed constant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Literal {
    pub literal_type: Option<LiteralType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralType {
    I32(i32),
    String(String),
    Fp64(f64),
}

/// Attribute referenced by name, resolved by the remote engine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnresolvedAttribute {
    pub unparsed_identifier: String,
}

/// Function referenced by name, resolved by the remote engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnresolvedFunction {
    /// Name path of the function; a single entry for operators
    pub parts: Vec<String>,
    /// Arguments in positional order
    pub arguments: Vec<Expression>,
}

impl Expression {
    pub fn from_literal(literal_type: LiteralType) -> Self {
        Self {
            expr_type: Some(ExprType::Literal(Literal {
                literal_type: Some(literal_type),
            })),
        }
    }

    pub fn from_attribute(unparsed_identifier: impl Into<String>) -> Self {
        Self {
            expr_type: Some(ExprType::UnresolvedAttribute(UnresolvedAttribute {
                unparsed_identifier: unparsed_identifier.into(),
            })),
        }
    }

    pub fn from_function(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            expr_type: Some(ExprType::UnresolvedFunction(UnresolvedFunction {
                parts: vec![name.into()],
                arguments,
            })),
        }
    }

    pub fn literal(&self) -> Option<&Literal> {
        match &self.expr_type {
            Some(ExprType::Literal(lit)) => Some(lit),
            _ => None,
        }
    }

    pub fn unresolved_attribute(&self) -> Option<&UnresolvedAttribute> {
        match &self.expr_type {
            Some(ExprType::UnresolvedAttribute(attr)) => Some(attr),
            _ => None,
        }
    }

    pub fn unresolved_function(&self) -> Option<&UnresolvedFunction> {
        match &self.expr_type {
            Some(ExprType::UnresolvedFunction(fun)) => Some(fun),
            _ => None,
        }
    }
}

impl Literal {
    pub fn i32(&self) -> Option<i32> {
        match self.literal_type {
            Some(LiteralType::I32(v)) => Some(v),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<&str> {
        match &self.literal_type {
            Some(LiteralType::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn fp64(&self) -> Option<f64> {
        match self.literal_type {
            Some(LiteralType::Fp64(v)) => Some(v),
            _ => None,
        }
    }
}

impl UnresolvedFunction {
    /// Operator name when the function path has a single part
    pub fn name(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [name] => Some(name),
            _ => None,
        }
    }
}
