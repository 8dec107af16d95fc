use crate::ast::literals::{Literal, VarRef};
use crate::ast::traits::{write_child, write_line, Node, Position};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "div")]
    Div,
    #[serde(rename = "mod")]
    Mod,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "<>")]
    NotEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "and")]
    And,
    #[serde(rename = "or")]
    Or,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Div => "div",
            BinaryOperator::Mod => "mod",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "<>",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Equal
                | BinaryOperator::NotEqual
                | BinaryOperator::Less
                | BinaryOperator::LessEqual
                | BinaryOperator::Greater
                | BinaryOperator::GreaterEqual
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    /// Arithmetic negation, tagged apart from binary minus
    #[serde(rename = "UMINUS")]
    Minus,
    #[serde(rename = "not")]
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Minus => f.write_str("UMINUS"),
            UnaryOperator::Not => f.write_str("not"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum Expression {
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    VarRef(VarRef),
    Literal(Literal),
}

impl Node for Expression {
    fn position(&self) -> Position {
        match self {
            Expression::BinaryOp(e) => e.position(),
            Expression::UnaryOp(e) => e.position(),
            Expression::VarRef(e) => e.position(),
            Expression::Literal(e) => e.position(),
        }
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        match self {
            Expression::BinaryOp(e) => e.write_tree(out, level),
            Expression::UnaryOp(e) => e.write_tree(out, level),
            Expression::VarRef(e) => e.write_tree(out, level),
            Expression::Literal(e) => e.write_tree(out, level),
        }
    }
}

/// Binary operation; positioned at its operator token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOp {
    pub op: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub pos: Position,
}

impl BinaryOp {
    pub fn new(op: BinaryOperator, left: Expression, right: Expression, pos: Position) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            pos,
        }
    }
}

impl Node for BinaryOp {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("BinaryOp(op='{}'):", self.op));
        write_child(out, level + 1, "left", self.left.as_ref());
        write_child(out, level + 1, "right", self.right.as_ref());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub operand: Box<Expression>,
    #[serde(flatten)]
    pub pos: Position,
}

impl UnaryOp {
    pub fn new(op: UnaryOperator, operand: Expression, pos: Position) -> Self {
        Self {
            op,
            operand: Box::new(operand),
            pos,
        }
    }
}

impl Node for UnaryOp {
    fn position(&self) -> Position {
        self.pos
    }

    fn write_tree(&self, out: &mut String, level: usize) {
        write_line(out, level, format_args!("UnaryOp(op='{}'):", self.op));
        write_child(out, level + 1, "operand", self.operand.as_ref());
    }
}
