use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::types::PrimitiveType;

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub identifier: String,
    pub ty: PrimitiveType,
    pub initialized: bool,
    pub declared_at_line: u32,
}

/// The symbols declared in one scope-defining node, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    pub fn register(&mut self, symbol: Symbol, current_position: Position) -> Result<(), Error> {
        if let Some(existing) = self.symbols.get(&symbol.identifier) {
            Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    identifier: symbol.identifier,
                    first_declared_at: existing.declared_at_line,
                },
                current_position,
            ))
        } else {
            self.symbols.insert(symbol.identifier.clone(), symbol);
            Ok(())
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&Symbol> {
        self.symbols.get(identifier)
    }

    /// Flips a symbol to initialized. Returns false when the identifier is not in this table.
    pub fn mark_initialized(&mut self, identifier: &str) -> bool {
        match self.symbols.get_mut(identifier) {
            Some(symbol) => {
                symbol.initialized = true;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}
