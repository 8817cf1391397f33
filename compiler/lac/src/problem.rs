//! Anything that stops a La program from running to completion.

use la_eval::EvalError;
use la_ir::Span;
use la_parse::ParseError;
use thiserror::Error;

/// A frontend or runtime failure, ready to be rendered against its source.
#[derive(Debug, Error)]
pub enum Problem {
    /// Lexing or parsing failed; nothing ran.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Evaluation failed part way through.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Problem {
    pub fn span(&self) -> Option<Span> {
        match self {
            Problem::Parse(err) => err.span(),
            Problem::Eval(err) => err.span(),
        }
    }

    /// Text attached to the highlighted source range.
    pub fn label(&self) -> String {
        match self {
            Problem::Parse(err) => err.label(),
            Problem::Eval(err) => err.label().to_string(),
        }
    }

    /// Heading used in rendered reports.
    pub fn phase(&self) -> &'static str {
        match self {
            Problem::Parse(ParseError::Lex(_)) => "lex error",
            Problem::Parse(_) => "parse error",
            Problem::Eval(_) => "runtime error",
        }
    }
}
