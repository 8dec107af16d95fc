use crate::ast::traits::{write_line, Node, Position};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Integer(i64),
    Real(f64),
    Boolean(bool),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Integer(n) => write!(f, "{}", n),
            // Debug keeps the fractional part: 2.0 rather than 2
            LiteralValue::Real(r) => write!(f, "{:?}", r),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    #[serde(flatten)]
    pub pos: Position,
}

impl Literal {
    pub fn new(value: LiteralValue, pos: Position) -> Self {
        Self { value, pos }
    }
}

impl Node for Literal {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("Literal({})", self.value));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarRef {
    pub name: String,
    #[serde(flatten)]
    pub pos: Position,
}

impl VarRef {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}

impl Node for VarRef {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("VarRef('{}')", self.name));
    }
}
