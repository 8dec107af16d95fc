use std::io;
use thiserror::Error;

use crate::utils::string_utils::format_error_line;

#[derive(Debug, Error)]
pub enum PascalError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileRead(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Lexical analysis errors
    #[error("{message}")]
    Lexical {
        message: String,
        line: usize,
        col: usize,
    },

    // Parsing errors
    #[error("{message}")]
    Syntax {
        message: String,
        line: Option<usize>,
        col: Option<usize>,
    },

    // Semantic analysis errors
    #[error("{message}")]
    Semantic {
        message: String,
        line: usize,
        col: usize,
    },

    // Anything else that goes wrong while parsing
    #[error("syntax analysis failed: {0}")]
    Internal(String),
}

impl PascalError {
    /// Create a lexical error for an unrecognized character
    pub fn lexical(ch: char, line: usize, col: usize) -> Self {
        PascalError::Lexical {
            message: format!("unrecognized character '{}' at line {}, column {}", ch, line, col),
            line,
            col,
        }
    }

    pub fn unterminated_comment(line: usize, col: usize) -> Self {
        PascalError::Lexical {
            message: format!("unterminated comment starting at line {}, column {}", line, col),
            line,
            col,
        }
    }

    /// Create a lexical error for a numeric constant that does not fit its type
    pub fn invalid_number(text: &str, line: usize, col: usize) -> Self {
        PascalError::Lexical {
            message: format!(
                "invalid integer constant '{}' at line {}, column {}",
                text, line, col
            ),
            line,
            col,
        }
    }

    /// Create a syntax error for a token that cannot extend the current construct.
    /// The message carries the offending source line with a caret under `col`.
    pub fn unexpected_token(text: &str, line: usize, col: usize, source: &str) -> Self {
        let mut message = format!("unexpected token '{}' at line {}, column {}", text, line, col);
        let snippet = format_error_line(source, line, col);
        if !snippet.is_empty() {
            message.push('\n');
            message.push_str(&snippet);
        }
        PascalError::Syntax {
            message,
            line: Some(line),
            col: Some(col),
        }
    }

    /// Create a syntax error for input that ends mid-construct
    pub fn unexpected_eof() -> Self {
        PascalError::Syntax {
            message: "unexpected end of input".to_string(),
            line: None,
            col: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PascalError::Internal(message.into())
    }

    pub fn semantic(message: impl Into<String>, line: usize, col: usize) -> Self {
        PascalError::Semantic {
            message: message.into(),
            line,
            col,
        }
    }

    /// Line and column of the diagnostic, when it has one
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            PascalError::Lexical { line, col, .. } | PascalError::Semantic { line, col, .. } => {
                Some((*line, *col))
            }
            PascalError::Syntax {
                line: Some(line),
                col: Some(col),
                ..
            } => Some((*line, *col)),
            _ => None,
        }
    }

    fn stage(&self) -> &'static str {
        match self {
            PascalError::Lexical { .. } => "Lexical error",
            PascalError::Syntax { .. } | PascalError::Internal(_) => "Syntax error",
            PascalError::Semantic { .. } => "Semantic error",
            PascalError::FileRead(_) | PascalError::Io(_) => "Input error",
        }
    }

    /// Render the caller-facing diagnostic for `source`.
    ///
    /// Syntax errors already embed their caret line; lexical and semantic
    /// errors get one appended here.
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("{}: {}", self.stage(), self);
        if let PascalError::Lexical { line, col, .. } | PascalError::Semantic { line, col, .. } =
            self
        {
            let snippet = format_error_line(source, *line, *col);
            if !snippet.is_empty() {
                out.push('\n');
                out.push_str(&snippet);
            }
        }
        out
    }
}

// Type alias for Result with PascalError
pub type PascalResult<T> = Result<T, PascalError>;
