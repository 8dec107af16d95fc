use crate::ast::block::Block;
use crate::ast::traits::{write_line, Node, Position};
use serde::Serialize;

/// Root of every successful parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub name: String,
    pub block: Block,
    #[serde(flatten)]
    pub pos: Position,
}

impl Program {
    pub fn new(name: impl Into<String>, block: Block, pos: Position) -> Self {
        Self {
            name: name.into(),
            block,
            pos,
        }
    }
}

impl Node for Program {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("Program(name='{}')", self.name));
        self.block.write_tree(out, level + 1);
    }
}
