//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. Tokenizing runs in three passes:
//!
//! - A character scan producing single-character tokens and classified words
//! - Coalescing of adjacent tokens into two-character comparison operators
//! - Enrichment of operator tokens with precedence and arity
//!
//! Token positions (line and column) are tracked for error reporting.

pub mod lexer;
pub mod tokens;
