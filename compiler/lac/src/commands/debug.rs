//! Debug commands: `parse` and `lex` for inspecting the frontend.

use std::process::ExitCode;

use la_ir::printer::print_file;
use la_ir::LineOffsetTable;

use super::{read_file, RunOptions};
use crate::diagnostic::report_problem;
use crate::Problem;

/// Parse a file and print its AST dump.
pub fn parse_file(options: &RunOptions) -> ExitCode {
    let Some(source) = read_file(&options.path) else {
        return ExitCode::FAILURE;
    };

    match la_parse::parse(&source) {
        Ok(file) => {
            print!("{}", print_file(&file, &source));
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_problem(&Problem::Parse(err), &options.path, &source, options.use_color());
            ExitCode::FAILURE
        }
    }
}

/// Lex a file and print the token stream.
pub fn lex_file(options: &RunOptions) -> ExitCode {
    let Some(source) = read_file(&options.path) else {
        return ExitCode::FAILURE;
    };

    let tokens = match la_lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            let problem = Problem::Parse(err.into());
            report_problem(&problem, &options.path, &source, options.use_color());
            return ExitCode::FAILURE;
        }
    };

    let lines = LineOffsetTable::build(&source);
    println!("Tokens for '{}' ({} tokens):", options.path, tokens.len());
    for token in tokens.iter() {
        let (line, column) = lines.line_column(&source, token.span.start);
        println!(
            "  {:<16} {:<12} @ {line}:{column}",
            format!("{:?}", token.kind),
            token.text(&source)
        );
    }
    ExitCode::SUCCESS
}
