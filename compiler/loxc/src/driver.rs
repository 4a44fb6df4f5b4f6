//! Run modes: whole script, interactive prompt, and the shared core.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use lox_diagnostic::emitter::TerminalEmitter;
use lox_diagnostic::{DiagnosticQueue, ErrorGuaranteed, Reporter};
use lox_ir::Token;
use tracing::debug;

use crate::{Config, DriverError};

const PROMPT: &str = "> ";

/// Scan `source` and print one token per line to `out`.
///
/// Lexical errors go to `reporter`; the caller decides what they mean for
/// the run. Only failures writing to `out` are returned.
pub fn run_source<O, R>(
    source: &str,
    out: &mut O,
    reporter: &mut R,
    config: &Config,
) -> io::Result<()>
where
    O: Write + ?Sized,
    R: Reporter + ?Sized,
{
    let tokens = lox_lexer::lex(source, reporter);
    for token in &tokens {
        write_token(out, token, config.show_literals)?;
    }
    Ok(())
}

/// One output line: `KIND lexeme`, plus the literal when asked for.
fn write_token<O>(out: &mut O, token: &Token, show_literals: bool) -> io::Result<()>
where
    O: Write + ?Sized,
{
    if show_literals {
        writeln!(out, "{token}")
    } else {
        writeln!(out, "{} {}", token.kind, token.lexeme)
    }
}

/// Scan the script at `path`.
///
/// Returns `Ok(Some(_))` when the script had lexical errors; they have
/// already been written to `errors` by then.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and scanned
/// like any other character, so they surface as `Unexpected character`.
pub fn run_file<O, E>(
    path: &Path,
    out: &mut O,
    errors: &mut E,
    config: &Config,
) -> Result<Option<ErrorGuaranteed>, DriverError>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    debug!(path = %path.display(), "running script");
    let bytes = fs::read(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);

    let mut queue = DiagnosticQueue::with_config(config.diagnostic_config());
    run_source(&source, out, &mut queue, config)?;
    out.flush()?;
    Ok(emit_diagnostics(&mut queue, errors, config))
}

/// Read lines from `input` and scan each one until an empty line or end
/// of input.
///
/// Errors on one line are shown and then forgotten, so the session keeps
/// going.
pub fn run_prompt<I, O, E>(
    mut input: I,
    out: &mut O,
    errors: &mut E,
    config: &Config,
) -> Result<(), DriverError>
where
    I: BufRead,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut queue = DiagnosticQueue::with_config(config.diagnostic_config());
    let mut line = String::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let source = line.trim_end_matches(['\n', '\r']);
        if source.is_empty() {
            break;
        }

        run_source(source, out, &mut queue, config)?;
        out.flush()?;
        emit_diagnostics(&mut queue, errors, config);
        queue.reset();
    }

    debug!("prompt closed");
    Ok(())
}

/// Render everything in `queue` to `errors`, in source order.
fn emit_diagnostics<E>(
    queue: &mut DiagnosticQueue,
    errors: &mut E,
    config: &Config,
) -> Option<ErrorGuaranteed>
where
    E: Write + ?Sized,
{
    let guarantee = queue.error_guaranteed()?;
    let suppressed = queue.suppressed_count();

    // Auto is resolved by the caller; an unresolved mode renders plain.
    let mut emitter = TerminalEmitter::with_color_mode(errors, config.color, false);
    for diagnostic in queue.flush() {
        emitter.report(diagnostic);
    }
    emitter.emit_suppressed(suppressed);
    emitter.flush();

    debug!(
        shown = emitter.error_count(),
        suppressed, "lexical errors reported"
    );
    Some(guarantee)
}
