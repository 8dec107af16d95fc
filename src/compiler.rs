//! Entry points used by tools built on top of the front end.
//!
//! `Compiler` binds a source text and exposes the lexical and syntactic
//! passes over it. This is the only place where diagnostics are turned into
//! strings; everything below it works with [`PascalError`].

use crate::ast::{Node, Program};
use crate::frontend::lexer::Lexer;
use crate::frontend::parser::Parser;
use crate::frontend::source::SourceContext;
use crate::frontend::token::TokenInfo;
use crate::semantic;
use crate::utils::errors::{PascalError, PascalResult};
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct Compiler {
    source: String,
    tokens: Vec<TokenInfo>,
    ast: Option<Program>,
    errors: Vec<String>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the text used by every later call. Drops any previous tokens and AST.
    pub fn set_source(&mut self, text: impl Into<String>) {
        self.source = text.into();
        self.tokens.clear();
        self.ast = None;
        self.errors.clear();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scan the bound source. A lexical error yields no token list.
    pub fn lexical_analysis(&self) -> Result<Vec<TokenInfo>, String> {
        let lexer = Lexer::new(SourceContext::new(&self.source));
        let mut tokens = Vec::new();
        for token in lexer {
            match token {
                Ok(token) => tokens.push(TokenInfo::from(&token)),
                Err(err) => return Err(self.report(&err)),
            }
        }
        debug!(tokens = tokens.len(), "lexical analysis complete");
        Ok(tokens)
    }

    /// Parse the bound source into a fresh AST owned by the caller.
    pub fn syntactic_analysis(&self) -> Result<Program, String> {
        self.parse_guarded().map_err(|err| self.report(&err))
    }

    /// Parse and render the tree dump
    pub fn build_ast(&self) -> Result<String, String> {
        self.syntactic_analysis().map(|program| program.to_tree_string())
    }

    /// Set `text` as the source and run both passes, keeping the tokens and
    /// the AST on success. Failures are recorded in [`Compiler::errors`].
    pub fn compile(&mut self, text: impl Into<String>) -> bool {
        self.set_source(text);
        match self.lexical_analysis() {
            Ok(tokens) => self.tokens = tokens,
            Err(message) => {
                self.errors.push(message);
                return false;
            }
        }
        match self.syntactic_analysis() {
            Ok(program) => {
                self.ast = Some(program);
                true
            }
            Err(message) => {
                self.errors.push(message);
                false
            }
        }
    }

    /// Tokens of the last successful lexical pass run by [`Compiler::compile`]
    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn ast(&self) -> Option<&Program> {
        self.ast.as_ref()
    }

    pub fn ast_tree(&self) -> Option<String> {
        self.ast.as_ref().map(|program| program.to_tree_string())
    }

    pub fn ast_json(&self) -> Option<Value> {
        let program = self.ast.as_ref()?;
        match program.to_value() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "AST serialization failed");
                None
            }
        }
    }

    /// Run the declaration checker on the AST kept by [`Compiler::compile`]
    pub fn semantic_analysis(&self) -> Vec<String> {
        match &self.ast {
            Some(program) => semantic::analyze(program)
                .iter()
                .map(|err| err.render(&self.source))
                .collect(),
            None => Vec::new(),
        }
    }

    // Any panic below the parser surfaces as an internal error, never as an unwind
    fn parse_guarded(&self) -> PascalResult<Program> {
        let context = SourceContext::new(&self.source);
        panic::catch_unwind(AssertUnwindSafe(|| Parser::new(context).parse()))
            .unwrap_or_else(|_| Err(PascalError::internal("internal error")))
    }

    fn report(&self, err: &PascalError) -> String {
        warn!(error = %err, "compilation step failed");
        err.render(&self.source)
    }
}
