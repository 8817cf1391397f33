//! Parse error types.

use la_ir::Span;
use la_lexer::{LexError, TokenKind};
use thiserror::Error;

/// Failure to turn source text into a [`File`](la_ir::File).
///
/// Parsing stops at the first error; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        span: Span,
    },

    #[error("integer literal `{text}` does not fit in a 32-bit signed integer")]
    LiteralOutOfRange { text: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::UnexpectedToken { span, .. } | ParseError::LiteralOutOfRange { span, .. } => {
                Some(*span)
            }
        }
    }

    /// Short label for the source snippet in a rendered diagnostic.
    pub fn label(&self) -> String {
        match self {
            ParseError::Lex(_) => "not part of any token".to_string(),
            ParseError::UnexpectedToken { expected, .. } => format!("expected {expected} here"),
            ParseError::LiteralOutOfRange { .. } => "literal too large".to_string(),
        }
    }
}
