//! Command handlers for the `la` binary.
//!
//! Each handler reads its file, does its work and reports problems itself;
//! it returns the process exit code.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

use std::io::IsTerminal;

/// Options shared by the commands that read a source file.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Source file to read.
    pub path: String,
    /// Never color diagnostics, even on a terminal.
    pub no_color: bool,
}

impl RunOptions {
    /// Whether diagnostics written to stderr should be colored.
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

/// Read a source file, printing why on failure.
pub(super) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}
