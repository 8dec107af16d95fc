use crate::ast::{LiteralValue, Position, VarType};
use crate::utils::errors::{PascalError, PascalResult};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolType {
    Variable(VarType),
    Constant(LiteralValue),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub symbol_type: SymbolType,
    pub declared_at: Position,
}

impl Symbol {
    pub fn new(symbol_type: SymbolType, declared_at: Position) -> Self {
        Self {
            symbol_type,
            declared_at,
        }
    }
}

/// Flat name table for one program. Names are case-sensitive.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_symbol(&mut self, name: &str, symbol: Symbol) -> PascalResult<()> {
        if self.symbols.contains_key(name) {
            return Err(PascalError::semantic(
                format!("variable already declared: {}", name),
                symbol.declared_at.line,
                symbol.declared_at.col,
            ));
        }
        self.symbols.insert(name.to_string(), symbol);
        Ok(())
    }

    pub fn get_symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
