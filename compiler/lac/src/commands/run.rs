//! The `run` command: parse and evaluate a La source file.

use std::process::ExitCode;

use la_eval::stdout_handler;

use super::{read_file, RunOptions};
use crate::diagnostic::report_problem;
use crate::interpret_source;

/// Run a La program, printing its output to stdout.
///
/// Stops at the first problem; output printed before it stays printed.
pub fn run_file(options: &RunOptions) -> ExitCode {
    let Some(source) = read_file(&options.path) else {
        return ExitCode::FAILURE;
    };

    tracing::debug!(path = %options.path, bytes = source.len(), "run");
    match interpret_source(&source, stdout_handler()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(problem) => {
            report_problem(&problem, &options.path, &source, options.use_color());
            ExitCode::FAILURE
        }
    }
}
