use crate::{
    ast::{
        ast::{Leaf, NodeId, NodeKind},
        expressions::Expression,
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{binary_operator, unary_operator},
    parser::Parser,
};

/// Deepest operator nesting accepted in one expression.
pub const MAX_EXPRESSION_DEPTH: usize = 512;

/// An operand on the output stack with the nesting depth of its subtree.
type Operand = (NodeId, usize);

/// Parses every remaining token of the current statement as one expression.
///
/// Shunting-yard over an operator stack and an operand stack. A binary
/// operator first reduces every stacked operator of higher or equal
/// precedence, which makes equal precedence group to the left. Prefix
/// operators are pushed without reducing anything. Expressions nested
/// deeper than [`MAX_EXPRESSION_DEPTH`] are a SyntaxError.
pub fn parse_expression(parser: &mut Parser) -> Result<NodeId, Error> {
    let position = parser.get_position();
    let tokens = parser.take_remaining();
    if tokens.is_empty() {
        return Err(Error::syntax("expected an expression", position));
    }

    let mut operators: Vec<Token> = vec![];
    let mut operands: Vec<Operand> = vec![];

    for token in tokens {
        match token.kind {
            TokenKind::Identifier | TokenKind::LiteralValue => {
                operands.push((parser.add_leaf(&token)?, 0));
            }
            TokenKind::OpenParen => operators.push(token),
            TokenKind::CloseParen => loop {
                match operators.pop() {
                    Some(top) if top.kind == TokenKind::OpenParen => break,
                    Some(top) => reduce(parser, &mut operands, top)?,
                    None => return Err(mismatched_parentheses(&token)),
                }
            },
            kind if kind.is_operator() => {
                let (precedence, arity) = operator_info(&token)?;

                if arity == 2 {
                    while let Some(top) = operators.last() {
                        if top.kind == TokenKind::OpenParen || precedence > operator_info(top)?.0 {
                            break;
                        }

                        if let Some(top) = operators.pop() {
                            reduce(parser, &mut operands, top)?;
                        }
                    }
                }

                operators.push(token);
            }
            _ => {
                return Err(Error::syntax(
                    format!("unexpected token `{}` in expression", token.value),
                    token.span.start.clone(),
                ))
            }
        }
    }

    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::OpenParen || top.kind == TokenKind::CloseParen {
            return Err(mismatched_parentheses(&top));
        }
        reduce(parser, &mut operands, top)?;
    }

    match operands.as_slice() {
        [(single, _)] => wrap_leaf(parser, *single),
        _ => Err(Error::internal(
            format!(
                "parsing an expression left {} nodes on the output stack",
                operands.len()
            ),
            position,
        )),
    }
}

fn operator_info(token: &Token) -> Result<(u8, u8), Error> {
    match (token.precedence(), token.arity()) {
        (Some(precedence), Some(arity)) => Ok((precedence, arity)),
        _ => Err(Error::internal(
            format!("operator token {} has no precedence or arity", token),
            token.span.start.clone(),
        )),
    }
}

fn mismatched_parentheses(token: &Token) -> Error {
    Error::syntax("mismatched parentheses in expression", token.span.start.clone())
}

/// Pops the operands of `operator` and pushes the expression applying it.
fn reduce(parser: &mut Parser, operands: &mut Vec<Operand>, operator: Token) -> Result<(), Error> {
    let (_, arity) = operator_info(&operator)?;
    let position = operator.span.start.clone();
    let missing_operand = || {
        Error::syntax(
            format!("operator `{}` is missing an operand", operator.value),
            position.clone(),
        )
    };
    let not_an_operator = || {
        Error::internal(
            format!("token {} is not an operator of arity {}", operator, arity),
            position.clone(),
        )
    };

    let (expression, depth) = match arity {
        1 => {
            let (operand, depth) = operands.pop().ok_or_else(missing_operand)?;
            let expression = Expression::Unary {
                operator: unary_operator(operator.kind).ok_or_else(not_an_operator)?,
                operand,
                ty: None,
            };
            (expression, depth + 1)
        }
        2 => {
            let (right, right_depth) = operands.pop().ok_or_else(missing_operand)?;
            let (left, left_depth) = operands.pop().ok_or_else(missing_operand)?;
            let expression = Expression::Binary {
                operator: binary_operator(operator.kind).ok_or_else(not_an_operator)?,
                left,
                right,
                ty: None,
            };
            (expression, left_depth.max(right_depth) + 1)
        }
        _ => return Err(not_an_operator()),
    };

    if depth > MAX_EXPRESSION_DEPTH {
        return Err(Error::syntax(
            format!(
                "expression nested too deeply, at most {} levels are allowed",
                MAX_EXPRESSION_DEPTH
            ),
            position,
        ));
    }

    operands.push((parser.add_node(NodeKind::Expression(expression), position), depth));
    Ok(())
}

/// Expressions are returned as they are; a bare identifier or literal gets a `SingleLeaf` wrapper.
fn wrap_leaf(parser: &mut Parser, node: NodeId) -> Result<NodeId, Error> {
    let target = parser.get_program().get(node);
    let position = target.position.clone();

    match &target.kind {
        NodeKind::Expression(_) => return Ok(node),
        NodeKind::Leaf(Leaf::Identifier(_)) | NodeKind::Leaf(Leaf::Literal(_)) => {}
        _ => {
            return Err(Error::internal(
                format!("node {} cannot stand as an expression", node.0),
                position,
            ))
        }
    }

    Ok(parser.add_node(
        NodeKind::Expression(Expression::SingleLeaf {
            leaf: node,
            ty: None,
        }),
        position,
    ))
}
