//! Diagnostic queue for collecting and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Position-ordered flushing
//! - `ErrorGuaranteed` proof that errors were reported

use crate::{Diagnostic, ErrorGuaranteed, Reporter};

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
}

impl DiagnosticConfig {
    /// Keep at most `limit` errors; later reports are only counted.
    pub fn with_error_limit(limit: usize) -> Self {
        DiagnosticConfig { error_limit: limit }
    }
}

/// Reporter that collects diagnostics for later inspection.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let tokens = lox_lexer::lex(source, &mut queue);
/// if let Some(_guarantee) = queue.error_guaranteed() {
///     for diag in queue.flush() { eprintln!("{diag}"); }
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Reports dropped because the error limit was reached.
    suppressed: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a queue with no error limit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            suppressed: 0,
            config,
        }
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.diagnostics.len() >= self.config.error_limit
    }

    /// Number of reports dropped after the limit was reached.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    /// Returns proof of failure if at least one error was reported.
    pub fn error_guaranteed(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count())
    }

    /// Sort diagnostics by position and return them, clearing the queue.
    ///
    /// Skips sorting if already in order (the common case for one scan).
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].position() <= w[1].position());

        if !already_sorted {
            self.diagnostics.sort_by_key(Diagnostic::position);
        }

        self.suppressed = 0;
        std::mem::take(&mut self.diagnostics)
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl Reporter for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        if self.limit_reached() {
            self.suppressed += 1;
            return;
        }
        self.diagnostics.push(diagnostic);
    }

    fn error_count(&self) -> usize {
        self.diagnostics.len() + self.suppressed
    }

    fn reset(&mut self) {
        self.diagnostics.clear();
        self.suppressed = 0;
    }
}

#[cfg(test)]
mod tests;
