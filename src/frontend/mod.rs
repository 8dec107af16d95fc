pub mod lexer;
pub mod parser;
pub mod source;
pub mod token;

pub use lexer::Lexer;
pub use parser::Parser;
pub use source::SourceContext;
pub use token::{Token, TokenInfo, TokenKind, TokenValue};
