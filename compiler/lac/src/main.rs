//! La interpreter CLI.

use std::process::ExitCode;

use lac::commands::{lex_file, parse_file, run_file, RunOptions};

fn main() -> ExitCode {
    lac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "parse" | "lex" => {
            let Some(options) = parse_run_options(&args[2..]) else {
                eprintln!("Usage: la {command} <file.la> [--no-color]");
                return ExitCode::FAILURE;
            };
            match command.as_str() {
                "parse" => parse_file(&options),
                "lex" => lex_file(&options),
                _ => run_file(&options),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-v" => {
            println!("La Interpreter {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare source path runs it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("la"))
            {
                match parse_run_options(&args[1..]) {
                    Some(options) => run_file(&options),
                    None => ExitCode::FAILURE,
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

/// First non-flag argument is the path; flags may come before or after it.
fn parse_run_options(args: &[String]) -> Option<RunOptions> {
    let mut path = None;
    let mut no_color = false;

    for arg in args {
        if arg == "--no-color" {
            no_color = true;
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            return None;
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }

    let Some(path) = path else {
        eprintln!("error: missing file path");
        return None;
    };
    Some(RunOptions { path, no_color })
}

fn print_usage() {
    println!("La Interpreter");
    println!();
    println!("Usage: la <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.la>        Run a La program");
    println!("  parse <file.la>      Parse and print the AST");
    println!("  lex <file.la>        Tokenize and print tokens with positions");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --no-color           Disable colored diagnostics");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable tracing, e.g. RUST_LOG=la_eval=debug");
    println!();
    println!("Examples:");
    println!("  la run fib.la");
    println!("  la fib.la                       # Same as `la run fib.la`");
    println!("  la parse gcd.la");
}
