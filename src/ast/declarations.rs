use crate::ast::literals::Literal;
use crate::ast::traits::{write_line, Node, Position};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Integer,
    Real,
    Boolean,
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarType::Integer => f.write_str("integer"),
            VarType::Real => f.write_str("real"),
            VarType::Boolean => f.write_str("boolean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstDecl {
    pub name: String,
    pub value: Literal,
    #[serde(flatten)]
    pub pos: Position,
}

impl ConstDecl {
    pub fn new(name: impl Into<String>, value: Literal, pos: Position) -> Self {
        Self {
            name: name.into(),
            value,
            pos,
        }
    }
}

impl Node for ConstDecl {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(
            out,
            level,
            format_args!("ConstDecl(name='{}', value={})", self.name, self.value.value),
        );
    }
}

/// One declared variable. `var a, b : real;` yields two of these, both
/// positioned at the `var` keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: VarType,
    #[serde(flatten)]
    pub pos: Position,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, var_type: VarType, pos: Position) -> Self {
        Self {
            name: name.into(),
            var_type,
            pos,
        }
    }
}

impl Node for VarDecl {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(
            out,
            level,
            format_args!("VarDecl(name='{}', type='{}')", self.name, self.var_type),
        );
    }
}
