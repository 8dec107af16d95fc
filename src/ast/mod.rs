// Abstract Syntax Tree definitions for the Pascal front end
// This module contains all AST node types and related traits.

mod traits;
pub use traits::{Node, Position};

// AST node modules
mod block;
mod declarations;
mod expressions;
mod literals;
mod program;
mod statements;

pub use block::Block;
pub use declarations::{ConstDecl, VarDecl, VarType};
pub use expressions::{BinaryOp, BinaryOperator, Expression, UnaryOp, UnaryOperator};
pub use literals::{Literal, LiteralValue, VarRef};
pub use program::Program;
pub use statements::{Assign, Compound, Direction, For, If, Repeat, Statement, While};
