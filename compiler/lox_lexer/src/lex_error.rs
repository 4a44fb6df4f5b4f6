//! Lexer error types.
//!
//! Errors are never part of the token stream. The scanner builds a
//! [`LexError`] at the point of detection, converts it into a
//! [`Diagnostic`] and hands it to the caller's reporter.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;

/// A lexer error located at the point where it was detected.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[line {line}:{column}] {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line at the point of detection.
    pub line: u32,
    /// 1-based byte column at the point of detection.
    pub column: u32,
    /// Source text consumed by the failed attempt.
    pub span: Span,
}

/// What kind of lexer error occurred.
///
/// The `Display` text is the user-facing message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("Unexpected character")]
    UnexpectedCharacter { found: char },
    /// Input ended before the closing `"`.
    #[error("Unterminated string")]
    UnterminatedString,
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
        }
    }
}

impl LexError {
    /// Create an unexpected character error.
    #[cold]
    pub fn unexpected_character(found: char, line: u32, column: u32, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedCharacter { found },
            line,
            column,
            span,
        }
    }

    /// Create an unterminated string error.
    ///
    /// `line` and `column` point at end of input, where the missing quote
    /// was noticed; `span` covers the whole unterminated literal.
    #[cold]
    pub fn unterminated_string(line: u32, column: u32, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            line,
            column,
            span,
        }
    }

    /// Render as a reporter diagnostic with an empty location.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.line, self.kind.to_string())
            .with_column(self.column)
            .with_code(self.kind.code())
            .with_span(self.span)
    }
}
