//! Lox scanner CLI
//!
//! `loxc [script]` prints the tokens of a script, or of each line typed at
//! the prompt when no script is given.

use std::io::{self, IsTerminal, Write};
use std::process;

use loxc::config::USAGE;
use loxc::{run_file, run_prompt, Config, DriverError, Mode, EX_DATAERR};

fn main() {
    loxc::init_tracing();

    let mut config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => fail(&err),
    };
    config.resolve_color(io::stderr().is_terminal());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut errors = stderr.lock();

    match &config.mode {
        Mode::Help => print_usage(),
        Mode::Version => println!("loxc {}", env!("CARGO_PKG_VERSION")),
        Mode::Prompt => {
            if let Err(err) = run_prompt(io::stdin().lock(), &mut out, &mut errors, &config) {
                fail(&err);
            }
        }
        Mode::File(path) => match run_file(path, &mut out, &mut errors, &config) {
            Ok(None) => {}
            Ok(Some(_)) => {
                let _ = out.flush();
                process::exit(EX_DATAERR);
            }
            Err(err) => fail(&err),
        },
    }
}

fn fail(err: &DriverError) -> ! {
    eprintln!("error: {err}");
    if matches!(err, DriverError::Usage(_)) {
        eprintln!("{USAGE}");
    }
    process::exit(err.exit_code());
}

fn print_usage() {
    println!("{USAGE}");
    println!();
    println!("With no script, reads lines from standard input and scans each one.");
    println!();
    println!("Options:");
    println!("  --literals            Print literal values after each token");
    println!("  --color=<when>        Color diagnostics: auto, always, never");
    println!("  --error-limit=<n>     Show at most n errors (0 = unlimited)");
    println!("  -h, --help            Show this help");
    println!("  -V, --version         Show version");
    println!();
    println!("Set LOX_LOG (or RUST_LOG) to enable tracing, e.g. LOX_LOG=lox_lexer=trace");
}
