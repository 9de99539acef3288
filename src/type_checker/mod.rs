//! Semantic analysis module.
//!
//! This module walks a parsed program statement by statement and:
//!
//! - Registers declared variables in the symbol table of their scope
//! - Resolves identifiers along the scope chain
//! - Infers the type of every expression and checks it against declarations
//! - Rejects reads of variables that were never given a value
//!
//! Analysis stops at the first error.

pub mod expr;
pub mod type_checker;

#[cfg(test)]
mod tests;
