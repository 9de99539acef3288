use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    ast::types::{LiteralValue, PrimitiveType},
    Span,
};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, (TokenKind, TokenPayload)> = {
        let mut map = HashMap::new();
        map.insert("declare", (TokenKind::Declaration, TokenPayload::None));
        map.insert("stdin", (TokenKind::StandardInput, TokenPayload::None));
        map.insert("stdout", (TokenKind::StandardOutput, TokenPayload::None));
        map.insert("bool", (TokenKind::TypeKeyword, TokenPayload::Type(PrimitiveType::Boolean)));
        map.insert("int", (TokenKind::TypeKeyword, TokenPayload::Type(PrimitiveType::Integer)));
        map.insert("float", (TokenKind::TypeKeyword, TokenPayload::Type(PrimitiveType::Float)));
        map.insert("true", (TokenKind::LiteralValue, TokenPayload::Literal(LiteralValue::Boolean(true))));
        map.insert("false", (TokenKind::LiteralValue, TokenPayload::Literal(LiteralValue::Boolean(false))));
        map
    };

    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(':', TokenKind::Colon);
        map.insert(';', TokenKind::Semicolon);
        map.insert('&', TokenKind::And);
        map.insert('|', TokenKind::Or);
        map.insert('=', TokenKind::Equal);
        map.insert('!', TokenKind::Not);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::Greater);
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Asterisk);
        map.insert('/', TokenKind::Slash);
        map.insert('~', TokenKind::Tilde);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    LiteralValue,
    TypeKeyword,

    OpenParen,
    CloseParen,

    Equal,     // =
    Equals,    // ==
    Not,       // !
    NotEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Colon,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Tilde,

    // Reserved
    Declaration,
    StandardInput,
    StandardOutput,
}

impl TokenKind {
    /// Precedence and arity of operator kinds, higher precedence binds tighter.
    pub fn operator_metadata(&self) -> Option<(u8, u8)> {
        match self {
            TokenKind::And | TokenKind::Or => Some((1, 2)),
            TokenKind::Not => Some((2, 1)),
            TokenKind::Equals
            | TokenKind::NotEquals
            | TokenKind::Less
            | TokenKind::LessEquals
            | TokenKind::Greater
            | TokenKind::GreaterEquals => Some((3, 2)),
            TokenKind::Plus | TokenKind::Minus => Some((4, 2)),
            TokenKind::Asterisk | TokenKind::Slash => Some((5, 2)),
            TokenKind::Tilde => Some((6, 1)),
            _ => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        self.operator_metadata().is_some()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Kind specific data carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenPayload {
    None,
    Identifier(String),
    Literal(LiteralValue),
    Type(PrimitiveType),
    Operator { precedence: u8, arity: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub payload: TokenPayload,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}:{},{})",
            self.kind, self.span.start.line, self.span.start.column
        )
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    pub fn precedence(&self) -> Option<u8> {
        match self.payload {
            TokenPayload::Operator { precedence, .. } => Some(precedence),
            _ => None,
        }
    }

    pub fn arity(&self) -> Option<u8> {
        match self.payload {
            TokenPayload::Operator { arity, .. } => Some(arity),
            _ => None,
        }
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::LiteralValue,
            TokenKind::TypeKeyword,
        ]) {
            tracing::trace!("{} ({})", self, self.value);
        } else {
            tracing::trace!("{} ()", self);
        }
    }
}
