pub mod analyzer;
pub mod symboltable;

pub use analyzer::{analyze, Analyzer};
pub use symboltable::{Symbol, SymbolTable, SymbolType};
