use crate::frontend::token::Token;
use crate::utils::errors::PascalError;

/// The program text a single scan/parse call works on.
///
/// Passed explicitly into the lexer and parser so diagnostics can quote the
/// offending line without any process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct SourceContext<'a> {
    text: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Syntax error for `token`, quoting its source line
    pub fn unexpected(&self, token: &Token) -> PascalError {
        PascalError::unexpected_token(&token.lexeme, token.line, token.column, self.text)
    }
}
