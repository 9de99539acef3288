//! Type system definitions for the AST.
//!
//! The language has three primitive types and a literal form for each:
//!
//! - `bool` with the literals `true` and `false`
//! - `int`, a signed 32 bit integer
//! - `float`, a 64 bit floating point number
//!
//! Types appear in the AST as type keywords of declarations, as the intrinsic
//! type of literals, and as the inferred type the analyzer tags on expressions.

use std::fmt::Display;

/// Represents the primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Integer,
    Float,
}

impl PrimitiveType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, PrimitiveType::Integer | PrimitiveType::Float)
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveType::Boolean => write!(f, "bool"),
            PrimitiveType::Integer => write!(f, "int"),
            PrimitiveType::Float => write!(f, "float"),
        }
    }
}

/// A literal value together with its primitive type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    Boolean(bool),
    Integer(i32),
    Float(f64),
}

impl LiteralValue {
    pub fn get_type(&self) -> PrimitiveType {
        match self {
            LiteralValue::Boolean(_) => PrimitiveType::Boolean,
            LiteralValue::Integer(_) => PrimitiveType::Integer,
            LiteralValue::Float(_) => PrimitiveType::Float,
        }
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Boolean(value) => write!(f, "{}", value),
            LiteralValue::Integer(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => {
                // Plain decimal notation only, the lexer has no exponent form
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{}", text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
        }
    }
}
