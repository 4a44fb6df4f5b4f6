//! The reporting seam between front-end stages and their callers.

use crate::Diagnostic;

/// Sink for front-end diagnostics.
///
/// Stages call [`report`](Reporter::report) once per problem and keep
/// scanning. The reporter remembers whether anything went wrong so the
/// caller can decide what to do with the run.
pub trait Reporter {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Number of errors reported since creation or the last [`reset`](Reporter::reset).
    fn error_count(&self) -> usize;

    /// Forget all previously reported errors.
    fn reset(&mut self);

    /// Report `message` at `line` with a "where" context.
    fn error_at(&mut self, line: u32, location: &str, message: &str) {
        self.report(Diagnostic::new(line, message).with_location(location));
    }

    /// Report `message` at `line` with no location context.
    fn error(&mut self, line: u32, message: &str) {
        self.error_at(line, "", message);
    }

    fn had_error(&self) -> bool {
        self.error_count() > 0
    }
}
