//! Lexer for Lox.
//!
//! Converts source text into a `Vec<Token>` for the parser. The scan is a
//! single left-to-right pass with maximal munch; malformed input is
//! reported through a [`Reporter`] and skipped, so one pass surfaces every
//! independent lexical error.
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! let tokens = lox_lexer::lex("var x = 1;", &mut queue);
//! assert!(!queue.had_error());
//! ```

mod cursor;
pub mod keywords;
mod lex_error;
mod scanner;

use lox_diagnostic::Reporter;
use lox_ir::Token;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

/// Lex source code into tokens.
///
/// The result always ends in exactly one `EOF` token. Check the reporter
/// afterwards to learn whether any lexical error occurred.
///
/// Offsets and line numbers are `u32`. Past 4 GiB of source they saturate
/// at `u32::MAX`; the scan still completes.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    Scanner::new(source).scan(reporter)
}
