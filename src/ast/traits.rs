/*
*                    pascalc -- reduced Pascal front end.
*
* program       = "program" ID ";" block "." ;
* block         = { const_decl | var_decl } "begin" statement_seq "end" ;
* const_decl    = "const" ID "=" literal ";" ;
* var_decl      = "var" ID { "," ID } ":" type ";" ;
* type          = "integer" | "real" | "boolean" ;
* statement_seq = statement { ";" statement } ;
* statement     = [ ID ":=" expression
*               | "if" expression "then" statement [ "else" statement ]
*               | "while" expression "do" statement
*               | "for" ID ":=" expression ( "to" | "downto" ) expression "do" statement
*               | "repeat" statement_seq "until" expression
*               | "begin" statement_seq "end" ] ;
* expression    = precedence, lowest first:
*                 or < and < not (prefix) < relational (non-assoc)
*                 < "+" "-" < "*" "/" div mod < unary "-" ;
*/

use crate::utils::config::ast::INDENT_UNIT;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Line and column of the token a node was built from, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

pub trait Node: Serialize {
    fn position(&self) -> Position;

    /// Append this node's dump to `out`, indented by `level` units
    fn write_tree(&self, out: &mut String, level: usize);

    fn to_tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    /// Generic tree-shaped value: nodes become maps, lists become arrays
    fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Write one indented line of a tree dump
pub(crate) fn write_line(out: &mut String, level: usize, args: fmt::Arguments) {
    for _ in 0..level {
        out.push_str(INDENT_UNIT);
    }
    out.push_str(&args.to_string());
    out.push('\n');
}

/// Write a labelled child section
pub(crate) fn write_child<N: Node>(out: &mut String, level: usize, label: &str, child: &N) {
    write_line(out, level, format_args!("{}:", label));
    child.write_tree(out, level + 1);
}
