use std::collections::HashMap;

use crate::{
    ast::{
        ast::NodeId,
        expressions::{BinaryOperator, UnaryOperator},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<NodeId, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Declaration, parse_variable_declaration_stmt);
    parser.stmt(TokenKind::Identifier, parse_variable_assignment_stmt);
    parser.stmt(TokenKind::StandardInput, parse_standard_input_stmt);
    parser.stmt(TokenKind::StandardOutput, parse_standard_output_stmt);
}

pub fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Subtract),
        TokenKind::Asterisk => Some(BinaryOperator::Multiply),
        TokenKind::Slash => Some(BinaryOperator::Divide),
        TokenKind::Equals => Some(BinaryOperator::Equals),
        TokenKind::NotEquals => Some(BinaryOperator::NotEquals),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEquals => Some(BinaryOperator::LessEquals),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEquals => Some(BinaryOperator::GreaterEquals),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

pub fn unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Tilde => Some(UnaryOperator::ArithmeticNegation),
        TokenKind::Not => Some(UnaryOperator::LogicalNegation),
        _ => None,
    }
}

// Keyed by the first token of a statement
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
