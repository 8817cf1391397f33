//! La interpreter driver.
//!
//! Glues the pipeline together (lex, parse, evaluate) and owns everything
//! that faces the user: command handlers, diagnostic rendering and log
//! setup. The `la` binary in `main.rs` only dispatches on arguments.

pub mod commands;
pub mod diagnostic;
mod problem;

pub use problem::Problem;

use std::sync::Once;

use la_eval::{Interpreter, SharedPrintHandler};

/// Parse and evaluate `source`, sending `println` output to `print_handler`.
///
/// Output produced before a runtime failure has already reached the handler
/// when the error is returned.
pub fn interpret_source(source: &str, print_handler: SharedPrintHandler) -> Result<(), Problem> {
    let file = la_parse::parse(source)?;
    tracing::debug!(statements = file.block.statements.len(), "parsed");
    Interpreter::new(print_handler).evaluate_file(&file)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=la_eval=debug` for a call tree or `RUST_LOG=trace` for frames.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
