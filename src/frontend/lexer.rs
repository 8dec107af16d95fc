use crate::frontend::source::SourceContext;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::lexer::{IDENTIFIER, INT_CONST, REAL_CONST, RESERVED_WORDS};
use crate::utils::errors::{PascalError, PascalResult};
use tracing::trace;

/// Lazy, restartable scanner over one source text.
///
/// Iterating yields `Ok(Token)` until the input is exhausted. The first
/// unscannable character yields a single `Err` and the iterator is then
/// finished; call [`Lexer::reset`] to scan again from the top.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    // Byte offset just past the last newline seen
    line_start: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(context: SourceContext<'a>) -> Self {
        Self {
            source: context.text(),
            pos: 0,
            line: 1,
            line_start: 0,
            finished: false,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.line_start = 0;
        self.finished = false;
    }

    /// Scan the whole input, stopping at the first lexical error
    pub fn tokenize(self) -> PascalResult<Vec<Token>> {
        self.collect()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn column_at(&self, pos: usize) -> usize {
        self.source[self.line_start..pos].chars().count() + 1
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
    }

    fn skip_whitespace_and_comments(&mut self) -> PascalResult<()> {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' => self.pos += 1,
                // CRLF ends a line like LF; a lone CR is not whitespace
                '\r' if self.peek_second() == Some('\n') => self.pos += 1,
                '\n' => {
                    self.pos += 1;
                    self.newline();
                }
                '{' => self.scan_comment()?,
                _ => break,
            }
        }
        Ok(())
    }

    fn scan_comment(&mut self) -> PascalResult<()> {
        let (start_line, start_col) = (self.line, self.column_at(self.pos));
        self.pos += 1; // Consume '{'
        while let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
            match ch {
                '\n' => self.newline(),
                '}' => return Ok(()),
                _ => {}
            }
        }
        Err(PascalError::unterminated_comment(start_line, start_col))
    }

    fn scan_token(&mut self, ch: char) -> PascalResult<Token> {
        match ch {
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.scan_identifier()),
            ':' => Ok(self.scan_pair('=', TokenKind::Assign, TokenKind::Colon)),
            '>' => Ok(self.scan_pair('=', TokenKind::GreaterThanEqual, TokenKind::GreaterThan)),
            '<' => Ok(match self.peek_second() {
                Some('>') => self.emit(TokenKind::NotEqual, 2),
                Some('=') => self.emit(TokenKind::LessThanEqual, 2),
                _ => self.emit(TokenKind::LessThan, 1),
            }),
            _ => self.scan_single_char_token(ch),
        }
    }

    /// Build a token from the next `len` bytes and advance past them
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;
        Token::new(kind, &self.source[start..self.pos], self.line, self.column_at(start))
    }

    fn scan_pair(&mut self, second: char, double: TokenKind, single: TokenKind) -> Token {
        if self.peek_second() == Some(second) {
            self.emit(double, 2)
        } else {
            self.emit(single, 1)
        }
    }

    fn scan_number(&mut self) -> PascalResult<Token> {
        let source = self.source;
        let rest = &source[self.pos..];
        if let Some(m) = REAL_CONST.find(rest) {
            // Only overflows to infinity, never fails for this pattern
            let value = m.as_str().parse::<f64>().unwrap_or(f64::INFINITY);
            return Ok(self.emit(TokenKind::RealConst(value), m.end()));
        }
        let text = INT_CONST.find(rest).map(|m| m.as_str()).unwrap_or_default();
        match text.parse::<i64>() {
            Ok(value) => Ok(self.emit(TokenKind::IntConst(value), text.len())),
            Err(_) => Err(PascalError::invalid_number(text, self.line, self.column_at(self.pos))),
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let source = self.source;
        let rest = &source[self.pos..];
        let text = IDENTIFIER.find(rest).map(|m| m.as_str()).unwrap_or_default();
        let kind = RESERVED_WORDS
            .get(text.to_ascii_lowercase().as_str())
            .cloned()
            .unwrap_or_else(|| TokenKind::Ident(text.to_string()));
        self.emit(kind, text.len())
    }

    fn scan_single_char_token(&mut self, ch: char) -> PascalResult<Token> {
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mult,
            '/' => TokenKind::Divide,
            '=' => TokenKind::Equal,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            _ => return Err(PascalError::lexical(ch, self.line, self.column_at(self.pos))),
        };
        Ok(self.emit(kind, 1))
    }
}

impl Iterator for Lexer<'_> {
    type Item = PascalResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.skip_whitespace_and_comments().and_then(|_| match self.peek() {
            Some(ch) => self.scan_token(ch).map(Some),
            None => Ok(None),
        });
        match result {
            Ok(Some(token)) => {
                trace!(kind = token.kind.name(), line = token.line, column = token.column, "token");
                Some(Ok(token))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

// Convenience function for scanning a whole source in one go
pub fn scan(source: &str) -> PascalResult<Vec<Token>> {
    Lexer::new(SourceContext::new(source)).tokenize()
}
