//! Runtime errors and their constructors.
//!
//! The first four variants are the language's own failure kinds; the rest
//! are host failures that can abort a run without being part of La.
//!
//! ```ignore
//! use la_eval::errors::{undefined_variable, redeclaration};
//! ```

use std::io;

use la_ir::Span;
use thiserror::Error;

use crate::Flow;

/// Result of evaluating a node.
pub type EvalResult<T = Flow> = Result<T, EvalError>;

/// Evaluation failure. The first one aborts the whole run.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("`return` outside of a function")]
    UnexpectedReturn { span: Span },

    #[error("variable `{name}` is already declared")]
    Redeclaration { name: String, span: Span },

    #[error("variable `{name}` is not defined")]
    VariableIsNotDefined { name: String, span: Span },

    #[error("function `{name}` is not defined")]
    FunctionIsNotDefined { name: String, span: Span },

    #[error("division by zero")]
    DivisionByZero { span: Span },

    #[error("failed to write program output")]
    Output(#[source] io::Error),
}

/// Copyable discriminant of [`EvalError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    UnexpectedReturn,
    Redeclaration,
    VariableIsNotDefined,
    FunctionIsNotDefined,
    DivisionByZero,
    Output,
}

impl EvalError {
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            EvalError::UnexpectedReturn { .. } => EvalErrorKind::UnexpectedReturn,
            EvalError::Redeclaration { .. } => EvalErrorKind::Redeclaration,
            EvalError::VariableIsNotDefined { .. } => EvalErrorKind::VariableIsNotDefined,
            EvalError::FunctionIsNotDefined { .. } => EvalErrorKind::FunctionIsNotDefined,
            EvalError::DivisionByZero { .. } => EvalErrorKind::DivisionByZero,
            EvalError::Output(_) => EvalErrorKind::Output,
        }
    }

    /// Source location of the failing node. `None` for output failures.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::UnexpectedReturn { span }
            | EvalError::Redeclaration { span, .. }
            | EvalError::VariableIsNotDefined { span, .. }
            | EvalError::FunctionIsNotDefined { span, .. }
            | EvalError::DivisionByZero { span } => Some(*span),
            EvalError::Output(_) => None,
        }
    }

    /// Short label for the source snippet in a rendered diagnostic.
    pub fn label(&self) -> &'static str {
        match self {
            EvalError::UnexpectedReturn { .. } => "this `return` is not inside a function body",
            EvalError::Redeclaration { .. } => "already visible from this scope",
            EvalError::VariableIsNotDefined { .. } => "no variable with this name in scope",
            EvalError::FunctionIsNotDefined { .. } => "no function with this name in scope",
            EvalError::DivisionByZero { .. } => "right operand is zero",
            EvalError::Output(_) => "",
        }
    }
}

// Language errors

#[cold]
pub fn unexpected_return(span: Span) -> EvalError {
    EvalError::UnexpectedReturn { span }
}

#[cold]
pub fn redeclaration(name: &str, span: Span) -> EvalError {
    EvalError::Redeclaration {
        name: name.to_string(),
        span,
    }
}

#[cold]
pub fn undefined_variable(name: &str, span: Span) -> EvalError {
    EvalError::VariableIsNotDefined {
        name: name.to_string(),
        span,
    }
}

#[cold]
pub fn undefined_function(name: &str, span: Span) -> EvalError {
    EvalError::FunctionIsNotDefined {
        name: name.to_string(),
        span,
    }
}

// Host errors

#[cold]
pub fn division_by_zero(span: Span) -> EvalError {
    EvalError::DivisionByZero { span }
}

impl From<io::Error> for EvalError {
    fn from(err: io::Error) -> Self {
        EvalError::Output(err)
    }
}
