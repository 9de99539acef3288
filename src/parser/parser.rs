//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the code block loop.
//! The token stream is cut into statements at semicolons; each statement
//! is dispatched on its first token through the statement lookup table and
//! its expressions are handed to the shunting-yard expression parser.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::{Leaf, NodeId, NodeKind, Program},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind, TokenPayload},
    Position,
};

use super::lookups::{create_token_lookups, StmtHandler, StmtLookup};

/// The main parser structure that maintains parsing state.
///
/// The parser owns the program under construction. While a statement is
/// being parsed, `statement_end` marks the index of its terminating
/// semicolon and no token at or past it is visible.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Index of the semicolon ending the current statement
    statement_end: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// The program being built
    program: Program,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    ///
    /// # Returns
    ///
    /// A new Parser instance with an empty program.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let start = tokens
            .first()
            .map(|token| token.span.start.clone())
            .unwrap_or_else(|| Position::new(1, 0, Rc::clone(&file)));

        Parser {
            tokens,
            pos: 0,
            statement_end: 0,
            file,
            stmt_lookup: HashMap::new(),
            program: Program::new(start),
        }
    }

    /// Returns the current token of the statement, or None once it is exhausted.
    pub fn current_token(&self) -> Option<&Token> {
        if self.pos < self.statement_end {
            self.tokens.get(self.pos)
        } else {
            None
        }
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.current_token().cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - Describes what was expected, used as the error message
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise a SyntaxError
    /// pointing at the offending token, or at the semicolon when the statement ended early.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::syntax(
                format!("{}, found `{}`", message, token.value),
                token.span.start.clone(),
            )),
            None => Err(Error::syntax(
                format!("{}, found the end of the statement", message),
                self.get_position(),
            )),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, &format!("expected {}", expected_kind))
    }

    /// Returns the tokens that remain in the current statement and consumes them.
    pub fn take_remaining(&mut self) -> Vec<Token> {
        let start = self.pos.min(self.statement_end);
        self.pos = self.statement_end;
        self.tokens[start..self.statement_end].to_vec()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind that starts the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns a reference to the program under construction.
    pub fn get_program(&self) -> &Program {
        &self.program
    }

    /// Adds a node to the program under construction.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> NodeId {
        self.program.add(kind, position)
    }

    /// Builds the leaf node for an identifier, literal or type keyword token.
    pub fn add_leaf(&mut self, token: &Token) -> Result<NodeId, Error> {
        let leaf = match &token.payload {
            TokenPayload::Identifier(name) => Leaf::Identifier(name.clone()),
            TokenPayload::Literal(value) => Leaf::Literal(*value),
            TokenPayload::Type(ty) => Leaf::TypeKeyword(*ty),
            _ => {
                return Err(Error::internal(
                    format!("token {} carries no leaf payload", token),
                    token.span.start.clone(),
                ))
            }
        };

        Ok(self.add_node(NodeKind::Leaf(leaf), token.span.start.clone()))
    }

    /// Returns the position of the current token, or of the statement's
    /// semicolon once the statement is exhausted.
    pub fn get_position(&self) -> Position {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|token| token.span.start.clone())
            .unwrap_or_else(|| Position::new(1, 0, Rc::clone(&self.file)))
    }

    /// Parses the statements in `tokens[start..end]` into a code block.
    ///
    /// # Arguments
    ///
    /// * `block` - The code block node receiving the statements
    /// * `start` - Index of the first token of the block
    /// * `end` - Index one past the last token of the block
    ///
    /// # Returns
    ///
    /// Ok once every statement of the range was added to the block.
    pub fn parse_code_block(&mut self, block: NodeId, start: usize, end: usize) -> Result<(), Error> {
        if start >= end || end > self.tokens.len() {
            return Err(Error::internal(
                format!(
                    "cannot parse a code block from token range {}..{} of {} tokens",
                    start,
                    end,
                    self.tokens.len()
                ),
                self.get_position(),
            ));
        }

        self.pos = start;

        while self.pos < end {
            let Some(limit) = (self.pos..end).find(|index| self.tokens[*index].kind == TokenKind::Semicolon) else {
                let last = &self.tokens[end - 1];
                return Err(Error::syntax(
                    format!("missing semicolon after `{}`", last.value),
                    last.span.end.clone(),
                ));
            };
            self.statement_end = limit;

            let statement = self.parse_statement()?;
            if !self.program.push_statement(block, statement) {
                return Err(Error::internal(
                    format!("node {} is not a code block", block.0),
                    self.get_position(),
                ));
            }

            self.pos = limit + 1;
        }

        Ok(())
    }

    fn parse_statement(&mut self) -> Result<NodeId, Error> {
        let Some(first) = self.current_token().cloned() else {
            return Err(Error::syntax(
                "expected a statement before `;`",
                self.get_position(),
            ));
        };

        let Some(handler) = self.get_stmt_lookup().get(&first.kind).copied() else {
            return Err(Error::syntax(
                format!("expected a statement, found `{}`", first.value),
                first.span.start.clone(),
            ));
        };

        let statement = handler(self)?;

        if let Some(token) = self.current_token() {
            return Err(Error::syntax(
                format!("unexpected token `{}`", token.value),
                token.span.start.clone(),
            ));
        }

        tracing::trace!("parsed statement starting at {}", first);
        Ok(statement)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup table, and parses every statement of the program body.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The program, or the first SyntaxError (CompilerError for internal failures).
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    if tokens.is_empty() {
        return Err(Error::syntax(
            "a program must contain at least one statement",
            Position::new(1, 0, file),
        ));
    }

    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let block = parser.program.code_block();
    let end = parser.tokens.len();
    parser.parse_code_block(block, 0, end)?;

    tracing::debug!(
        "parsed {} statements ({} nodes) from {}",
        parser.program.statements().len(),
        parser.program.len(),
        file
    );

    Ok(parser.program)
}
