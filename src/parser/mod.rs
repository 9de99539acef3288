//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into the program arena. It handles:
//!
//! - Splitting the token stream into statements at semicolons
//! - Statement dispatch on the first token of each statement
//! - Expression parsing with the shunting-yard algorithm
//!
//! Operator precedence and arity come from the lexer's token payloads;
//! the parser never decides precedence itself.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
