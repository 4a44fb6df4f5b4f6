//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::Write;

use crate::{Diagnostic, ErrorGuaranteed, Reporter};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Reporter that writes each diagnostic to `W` as soon as it arrives.
///
/// Output shape: `[line N] Error[E0002]: Unexpected character`, with the
/// column appended to the line number when known.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    error_count: usize,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            error_count: 0,
        }
    }

    /// Returns proof of failure if at least one error was emitted.
    pub fn error_guaranteed(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Note how many errors were dropped by an error limit.
    pub fn emit_suppressed(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.write_colored("note", colors::BOLD);
        let plural = if count == 1 { "" } else { "s" };
        let _ = writeln!(
            self.writer,
            ": {count} more error{plural} not shown (raise --error-limit to see them)"
        );
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Consume the emitter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_position(&mut self, diagnostic: &Diagnostic) {
        let position = match diagnostic.column {
            Some(column) => format!("[line {}:{column}]", diagnostic.line),
            None => format!("[line {}]", diagnostic.line),
        };
        self.write_colored(&position, colors::BOLD);
        let _ = write!(self.writer, " ");
    }
}

impl<W: Write> Reporter for TerminalEmitter<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.write_position(&diagnostic);
        match diagnostic.code {
            Some(code) => self.write_colored(&format!("Error[{code}]"), colors::ERROR),
            None => self.write_colored("Error", colors::ERROR),
        }
        let _ = writeln!(
            self.writer,
            "{}: {}",
            diagnostic.location, diagnostic.message
        );
        self.error_count += 1;
    }

    fn error_count(&self) -> usize {
        self.error_count
    }

    fn reset(&mut self) {
        self.error_count = 0;
    }
}
