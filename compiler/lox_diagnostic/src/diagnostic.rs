//! The `Diagnostic` value every reporter receives.

use std::fmt;

use lox_ir::Span;

use crate::ErrorCode;

/// A single reported problem.
///
/// `location` is the "where" context (for example ` at 'foo'`). It is
/// always empty for lexer diagnostics; later stages fill it in.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    /// 1-based line where the problem was detected.
    pub line: u32,
    /// 1-based byte column, when the reporting stage knows it.
    pub column: Option<u32>,
    pub location: String,
    pub message: String,
    pub code: Option<ErrorCode>,
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create a diagnostic with only a line and message.
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            column: None,
            location: String::new(),
            message: message.into(),
            code: None,
            span: None,
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Sort key: line, then column (unknown columns sort first).
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.column.unwrap_or(0))
    }
}

/// Renders `[line N] Error<location>: <message>`, or `[line N:C] ...`
/// when the column is known.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "[line {}:{column}] Error", self.line)?,
            None => write!(f, "[line {}] Error", self.line)?,
        }
        write!(f, "{}: {}", self.location, self.message)
    }
}
