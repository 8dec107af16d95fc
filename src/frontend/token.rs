use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Reserved words
    Program,
    Var,
    Const,
    Integer,
    Real,
    Boolean,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,
    Downto,
    Repeat,
    Until,
    Div,
    Mod,
    And,
    Or,
    Not,
    Begin,
    End,

    // Names and constants
    Ident(String),
    IntConst(i64),
    RealConst(f64),
    BoolConst(bool),

    // Operators and punctuation
    Plus,
    Minus,
    Mult,
    Divide,
    Assign,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    LParen,
    RParen,
    Semicolon,
    Colon,
    Comma,
    Dot,
}

impl TokenKind {
    /// Upper-case tag exposed to external consumers
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Const => "CONST",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::Downto => "DOWNTO",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Ident(_) => "ID",
            TokenKind::IntConst(_) => "INT_CONST",
            TokenKind::RealConst(_) => "REAL_CONST",
            TokenKind::BoolConst(_) => "BOOL_CONST",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NEQ",
            TokenKind::LessThan => "LT",
            TokenKind::GreaterThan => "GT",
            TokenKind::LessThanEqual => "LEQ",
            TokenKind::GreaterThanEqual => "GEQ",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMI",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
        }
    }

    /// True when both kinds are the same variant, ignoring carried data
    pub fn same_variant(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token. `column` is 1-based, counted from the last newline.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    pub fn value(&self) -> TokenValue {
        match &self.kind {
            TokenKind::IntConst(n) => TokenValue::Integer(*n),
            TokenKind::RealConst(r) => TokenValue::Real(*r),
            TokenKind::BoolConst(b) => TokenValue::Boolean(*b),
            _ => TokenValue::Text(self.lexeme.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
}

/// Owned record of a token handed out by the compiler facade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenInfo {
    #[serde(rename = "type")]
    pub token_type: &'static str,
    pub value: TokenValue,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenInfo {
    fn from(token: &Token) -> Self {
        Self {
            token_type: token.kind.name(),
            value: token.value(),
            line: token.line,
            column: token.column,
        }
    }
}
