/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node arena, node kinds and scope-chain lookup
/// - expressions: Binary, unary and single-leaf expressions
/// - statements: The four statement kinds
/// - types: Primitive types and literal values
/// - scope: Symbols and symbol tables
/// - printer: Rendering a program back to source text
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod scope;
pub mod statements;
pub mod types;
