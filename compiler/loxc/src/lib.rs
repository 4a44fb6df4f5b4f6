//! Lox command-line driver.
//!
//! Reads a script file or interactive lines, scans them, and prints the
//! resulting tokens. Lexical errors are collected per run and rendered to
//! the diagnostic stream; whether they fail the run is decided here, not
//! in the lexer.

pub mod config;
mod driver;
mod error;

use std::sync::Once;

pub use config::{Config, Mode};
pub use driver::{run_file, run_prompt, run_source};
pub use error::{DriverError, EX_DATAERR, EX_IOERR, EX_USAGE};

static TRACING_INIT: Once = Once::new();

/// Environment variables consulted for a tracing filter, in order.
const LOG_ENV_VARS: [&str; 2] = ["LOX_LOG", "RUST_LOG"];

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `LOX_LOG=lox_lexer=debug` (or `RUST_LOG`).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if a filter is configured
        let Some(directives) = LOG_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}
