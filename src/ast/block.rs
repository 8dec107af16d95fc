use crate::ast::declarations::{ConstDecl, VarDecl};
use crate::ast::statements::{serialize_statements, write_statements, Statement};
use crate::ast::traits::{write_line, Node, Position};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub consts: Vec<ConstDecl>,
    pub vars: Vec<VarDecl>,
    #[serde(serialize_with = "serialize_statements")]
    pub statements: Vec<Statement>,
    #[serde(flatten)]
    pub pos: Position,
}

impl Block {
    pub fn new(
        consts: Vec<ConstDecl>,
        vars: Vec<VarDecl>,
        statements: Vec<Statement>,
        pos: Position,
    ) -> Self {
        Self {
            consts,
            vars,
            statements,
            pos,
        }
    }
}

impl Node for Block {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("Block:"));
        if !self.consts.is_empty() {
            write_line(out, level + 1, format_args!("ConstDeclarations:"));
            for decl in &self.consts {
                decl.write_tree(out, level + 2);
            }
        }
        if !self.vars.is_empty() {
            write_line(out, level + 1, format_args!("VarDeclarations:"));
            for decl in &self.vars {
                decl.write_tree(out, level + 2);
            }
        }
        if !self.statements.is_empty() {
            write_line(out, level + 1, format_args!("Statements:"));
            write_statements(out, level + 2, &self.statements);
        }
    }
}
