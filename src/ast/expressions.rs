use std::fmt::Display;

use super::{ast::NodeId, types::PrimitiveType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    And,
    Or,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::And => "&",
            BinaryOperator::Or => "|",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `~`
    ArithmeticNegation,
    /// `!`
    LogicalNegation,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::ArithmeticNegation => write!(f, "~"),
            UnaryOperator::LogicalNegation => write!(f, "!"),
        }
    }
}

/// Expression nodes. Operands are either leaves or other expressions;
/// `ty` stays `None` until the type checker has visited the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression {
    Binary {
        operator: BinaryOperator,
        left: NodeId,
        right: NodeId,
        ty: Option<PrimitiveType>,
    },
    Unary {
        operator: UnaryOperator,
        operand: NodeId,
        ty: Option<PrimitiveType>,
    },
    /// Wraps a bare identifier or literal so every expression position holds an expression.
    SingleLeaf {
        leaf: NodeId,
        ty: Option<PrimitiveType>,
    },
}

impl Expression {
    pub fn get_type(&self) -> Option<PrimitiveType> {
        match self {
            Expression::Binary { ty, .. }
            | Expression::Unary { ty, .. }
            | Expression::SingleLeaf { ty, .. } => *ty,
        }
    }

    pub fn set_type(&mut self, inferred: PrimitiveType) {
        match self {
            Expression::Binary { ty, .. }
            | Expression::Unary { ty, .. }
            | Expression::SingleLeaf { ty, .. } => *ty = Some(inferred),
        }
    }

    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Expression::Binary { left, right, .. } => vec![*left, *right],
            Expression::Unary { operand, .. } => vec![*operand],
            Expression::SingleLeaf { leaf, .. } => vec![*leaf],
        }
    }
}
