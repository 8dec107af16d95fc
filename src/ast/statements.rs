use crate::ast::expressions::Expression;
use crate::ast::literals::VarRef;
use crate::ast::traits::{write_child, write_line, Node, Position};
use crate::utils::config::ast::{EMPTY_MARKER, NONE_MARKER};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum Statement {
    Assign(Assign),
    If(If),
    While(While),
    For(For),
    Repeat(Repeat),
    Compound(Compound),
    /// Placeholder for the gap between two semicolons
    Empty(Position),
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        matches!(self, Statement::Empty(_))
    }
}

impl Node for Statement {
    fn position(&self) -> Position {
        match self {
            Statement::Assign(s) => s.position(),
            Statement::If(s) => s.position(),
            Statement::While(s) => s.position(),
            Statement::For(s) => s.position(),
            Statement::Repeat(s) => s.position(),
            Statement::Compound(s) => s.position(),
            Statement::Empty(pos) => *pos,
        }
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        match self {
            Statement::Assign(s) => s.write_tree(out, level),
            Statement::If(s) => s.write_tree(out, level),
            Statement::While(s) => s.write_tree(out, level),
            Statement::For(s) => s.write_tree(out, level),
            Statement::Repeat(s) => s.write_tree(out, level),
            Statement::Compound(s) => s.write_tree(out, level),
            Statement::Empty(_) => write_line(out, level, format_args!("{}", EMPTY_MARKER)),
        }
    }
}

/// Serialize a statement list, leaving out empty placeholders
pub(crate) fn serialize_statements<S>(
    statements: &[Statement],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(statements.iter().filter(|s| !s.is_empty()))
}

pub(crate) fn write_statements(out: &mut String, level: usize, statements: &[Statement]) {
    for stmt in statements {
        stmt.write_tree(out, level);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub target: VarRef,
    pub value: Expression,
    #[serde(flatten)]
    pub pos: Position,
}

impl Assign {
    pub fn new(target: VarRef, value: Expression) -> Self {
        let pos = target.pos;
        Self { target, value, pos }
    }
}

impl Node for Assign {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("Assign:"));
        write_child(out, level + 1, "target", &self.target);
        write_child(out, level + 1, "value", &self.value);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct If {
    pub condition: Expression,
    pub then_stmt: Box<Statement>,
    pub else_stmt: Option<Box<Statement>>,
    #[serde(flatten)]
    pub pos: Position,
}

impl If {
    pub fn new(
        condition: Expression,
        then_stmt: Statement,
        else_stmt: Option<Statement>,
        pos: Position,
    ) -> Self {
        Self {
            condition,
            then_stmt: Box::new(then_stmt),
            else_stmt: else_stmt.map(Box::new),
            pos,
        }
    }
}

impl Node for If {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("If:"));
        write_child(out, level + 1, "condition", &self.condition);
        write_child(out, level + 1, "then", self.then_stmt.as_ref());
        match &self.else_stmt {
            Some(stmt) => write_child(out, level + 1, "else", stmt.as_ref()),
            None => {
                write_line(out, level + 1, format_args!("else:"));
                write_line(out, level + 2, format_args!("{}", NONE_MARKER));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct While {
    pub condition: Expression,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub pos: Position,
}

impl While {
    pub fn new(condition: Expression, body: Statement, pos: Position) -> Self {
        Self {
            condition,
            body: Box::new(body),
            pos,
        }
    }
}

impl Node for While {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("While:"));
        write_child(out, level + 1, "condition", &self.condition);
        write_child(out, level + 1, "body", self.body.as_ref());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    To,
    Downto,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::To => f.write_str("to"),
            Direction::Downto => f.write_str("downto"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct For {
    pub var: VarRef,
    pub start: Expression,
    pub direction: Direction,
    pub end: Expression,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub pos: Position,
}

impl For {
    pub fn new(
        var: VarRef,
        start: Expression,
        direction: Direction,
        end: Expression,
        body: Statement,
        pos: Position,
    ) -> Self {
        Self {
            var,
            start,
            direction,
            end,
            body: Box::new(body),
            pos,
        }
    }
}

impl Node for For {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(
            out,
            level,
            format_args!("For(var='{}', direction='{}'):", self.var.name, self.direction),
        );
        write_child(out, level + 1, "start", &self.start);
        write_child(out, level + 1, "end", &self.end);
        write_child(out, level + 1, "body", self.body.as_ref());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repeat {
    #[serde(serialize_with = "serialize_statements")]
    pub body: Vec<Statement>,
    pub condition: Expression,
    #[serde(flatten)]
    pub pos: Position,
}

impl Repeat {
    pub fn new(body: Vec<Statement>, condition: Expression, pos: Position) -> Self {
        Self { body, condition, pos }
    }
}

impl Node for Repeat {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("Repeat:"));
        write_line(out, level + 1, format_args!("body:"));
        write_statements(out, level + 2, &self.body);
        write_child(out, level + 1, "condition", &self.condition);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compound {
    #[serde(serialize_with = "serialize_statements")]
    pub statements: Vec<Statement>,
    #[serde(flatten)]
    pub pos: Position,
}

impl Compound {
    pub fn new(statements: Vec<Statement>, pos: Position) -> Self {
        Self { statements, pos }
    }
}

impl Node for Compound {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("Compound:"));
        write_line(out, level + 1, format_args!("statements:"));
        write_statements(out, level + 2, &self.statements);
    }
}
