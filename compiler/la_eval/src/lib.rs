//! La Eval - tree-walking evaluator for La programs.
//!
//! # Architecture
//!
//! - [`Interpreter`]: walks a parsed [`File`](la_ir::File), one `match` per
//!   node kind
//! - [`Frame`] / [`FrozenFrame`]: lexical scopes; closures capture a
//!   frozen snapshot
//! - [`Flow`]: carries `return` values up without using `Err`
//! - [`evaluate_binary`]: operator semantics over `i32`
//! - [`PrintHandlerImpl`]: where `println` output goes
//!
//! # Example
//!
//! ```ignore
//! let file = la_parse::parse("println(1 + 2)")?;
//! let output = la_eval::buffer_handler();
//! la_eval::Interpreter::new(output.clone()).evaluate_file(&file)?;
//! assert_eq!(output.get_output(), "3\n");
//! ```

mod environment;
pub mod errors;
mod flow;
pub mod interpreter;
mod operators;
mod print_handler;

pub use environment::{Frame, FrozenFrame, Function, Variable};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use flow::Flow;
pub use interpreter::{Interpreter, ScopedInterpreter};
pub use operators::{evaluate_binary, DivisionByZero};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, writer_handler, BufferPrintHandler,
    PrintHandlerImpl, SharedPrintHandler, StdoutPrintHandler, WriterPrintHandler,
};

#[cfg(test)]
mod tests;
