// Lexer constants
pub mod lexer {
    use crate::frontend::token::TokenKind;
    use lazy_static::lazy_static;
    use regex::Regex;
    use std::collections::HashMap;

    lazy_static! {
        /// Reserved words, matched against the lower-cased lexeme.
        /// `true` and `false` are literals, not keywords.
        pub static ref RESERVED_WORDS: HashMap<&'static str, TokenKind> = [
            ("program", TokenKind::Program),
            ("var", TokenKind::Var),
            ("const", TokenKind::Const),
            ("integer", TokenKind::Integer),
            ("real", TokenKind::Real),
            ("boolean", TokenKind::Boolean),
            ("if", TokenKind::If),
            ("then", TokenKind::Then),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("do", TokenKind::Do),
            ("for", TokenKind::For),
            ("to", TokenKind::To),
            ("downto", TokenKind::Downto),
            ("repeat", TokenKind::Repeat),
            ("until", TokenKind::Until),
            ("div", TokenKind::Div),
            ("mod", TokenKind::Mod),
            ("and", TokenKind::And),
            ("or", TokenKind::Or),
            ("not", TokenKind::Not),
            ("begin", TokenKind::Begin),
            ("end", TokenKind::End),
            ("true", TokenKind::BoolConst(true)),
            ("false", TokenKind::BoolConst(false)),
        ]
        .into_iter()
        .collect();

        // ASCII classes only: `\d` would also accept non-ASCII digits.
        pub static ref REAL_CONST: Regex = Regex::new(r"^[0-9]+\.[0-9]+").unwrap();
        pub static ref INT_CONST: Regex = Regex::new(r"^[0-9]+").unwrap();
        pub static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap();
    }
}

// Parser limits
pub mod parser {
    /// Depth budget for one parse. Parenthesised and unary operands and
    /// every folded binary operator take one unit; past the budget parsing
    /// bails out with an internal error.
    pub const MAX_NESTING_DEPTH: usize = 256;

    /// Units taken by one nested statement, capping statement nesting at
    /// 64 levels.
    pub const STATEMENT_DEPTH_COST: usize = 4;
}

// Tree-dump layout
pub mod ast {
    pub const INDENT_UNIT: &str = "  ";
    pub const NONE_MARKER: &str = "None";
    pub const EMPTY_MARKER: &str = "[Empty Statement]";
}
