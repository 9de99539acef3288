use crate::{
    ast::{
        ast::{Leaf, NodeId, NodeKind, Program},
        expressions::{BinaryOperator, Expression, UnaryOperator},
        types::PrimitiveType,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::type_checker::lookup_symbol;

/// Infers the type of an expression or leaf node, tagging expression nodes on the way.
pub fn type_check_expr(program: &mut Program, id: NodeId) -> Result<PrimitiveType, Error> {
    let node = program.get(id);
    let position = node.position.clone();

    let expression = match &node.kind {
        NodeKind::Expression(expression) => *expression,
        NodeKind::Leaf(leaf) => {
            let leaf = leaf.clone();
            return type_check_leaf(program, id, &leaf);
        }
        _ => {
            return Err(Error::internal(
                format!("node {} is not an expression", id.0),
                position,
            ))
        }
    };

    let ty = match expression {
        Expression::Binary {
            operator,
            left,
            right,
            ..
        } => {
            let left_type = type_check_expr(program, left)?;
            let right_type = type_check_expr(program, right)?;
            binary_type(operator, left_type, right_type).map_err(|message| {
                Error::type_error(message, position.clone())
            })?
        }
        Expression::Unary {
            operator, operand, ..
        } => {
            let operand_type = type_check_expr(program, operand)?;
            unary_type(operator, operand_type)
                .map_err(|message| Error::type_error(message, position.clone()))?
        }
        Expression::SingleLeaf { leaf, .. } => type_check_expr(program, leaf)?,
    };

    if let NodeKind::Expression(expression) = &mut program.get_mut(id).kind {
        expression.set_type(ty);
    }

    Ok(ty)
}

fn type_check_leaf(program: &Program, id: NodeId, leaf: &Leaf) -> Result<PrimitiveType, Error> {
    let position = program.get(id).position.clone();

    match leaf {
        Leaf::Literal(value) => Ok(value.get_type()),
        Leaf::Identifier(name) => {
            let (_, symbol) = lookup_symbol(program, id, name, position.clone())?;
            if !symbol.initialized {
                return Err(Error::new(
                    ErrorImpl::UninitializedVariable {
                        identifier: name.clone(),
                    },
                    position,
                ));
            }
            Ok(symbol.ty)
        }
        Leaf::TypeKeyword(ty) => Err(Error::internal(
            format!("type keyword `{}` used as an expression", ty),
            position,
        )),
    }
}

/// The result type of a binary operator, or a message naming the failing side.
pub fn binary_type(
    operator: BinaryOperator,
    left: PrimitiveType,
    right: PrimitiveType,
) -> Result<PrimitiveType, String> {
    match operator {
        BinaryOperator::Add
        | BinaryOperator::Subtract
        | BinaryOperator::Multiply
        | BinaryOperator::Divide => {
            if !left.is_numeric() {
                return Err(format!(
                    "left operand of `{}` must be int or float, found {}",
                    operator, left
                ));
            }
            if !right.is_numeric() {
                return Err(format!(
                    "right operand of `{}` must be int or float, found {}",
                    operator, right
                ));
            }

            match operator {
                BinaryOperator::Divide => Ok(PrimitiveType::Float),
                _ if left == PrimitiveType::Integer && right == PrimitiveType::Integer => {
                    Ok(PrimitiveType::Integer)
                }
                _ => Ok(PrimitiveType::Float),
            }
        }
        BinaryOperator::Equals
        | BinaryOperator::NotEquals
        | BinaryOperator::Less
        | BinaryOperator::LessEquals
        | BinaryOperator::Greater
        | BinaryOperator::GreaterEquals => {
            let comparable = (left.is_numeric() && right.is_numeric())
                || (left == PrimitiveType::Boolean && right == PrimitiveType::Boolean);

            if comparable {
                Ok(PrimitiveType::Boolean)
            } else {
                Err(format!(
                    "`{}` cannot compare {} with {}",
                    operator, left, right
                ))
            }
        }
        BinaryOperator::And | BinaryOperator::Or => {
            if left != PrimitiveType::Boolean {
                return Err(format!(
                    "left operand of `{}` must be bool, found {}",
                    operator, left
                ));
            }
            if right != PrimitiveType::Boolean {
                return Err(format!(
                    "right operand of `{}` must be bool, found {}",
                    operator, right
                ));
            }
            Ok(PrimitiveType::Boolean)
        }
    }
}

pub fn unary_type(operator: UnaryOperator, operand: PrimitiveType) -> Result<PrimitiveType, String> {
    match operator {
        UnaryOperator::ArithmeticNegation if operand.is_numeric() => Ok(operand),
        UnaryOperator::ArithmeticNegation => Err(format!(
            "operand of `{}` must be int or float, found {}",
            operator, operand
        )),
        UnaryOperator::LogicalNegation if operand == PrimitiveType::Boolean => Ok(operand),
        UnaryOperator::LogicalNegation => Err(format!(
            "operand of `{}` must be bool, found {}",
            operator, operand
        )),
    }
}
