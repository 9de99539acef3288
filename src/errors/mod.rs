//! Error types and error handling for the front end.
//!
//! This module defines the single error type returned by every stage:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and semantic analysis
//! - A severity split between user errors and internal compiler errors
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
