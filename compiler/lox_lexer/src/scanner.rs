//! Single-pass maximal-munch scanner.
//!
//! [`Scanner`] turns borrowed source text into an owned token sequence
//! that always ends in exactly one `EOF` token. Malformed input is
//! reported and skipped; the scan itself never fails.
//!
//! # Design
//!
//! The main loop consumes one byte and dispatches on it. Each arm either
//! emits a token, skips trivia, or hands off to a focused method that
//! consumes the rest of a multi-byte lexeme. No method backtracks past
//! the cursor.

use lox_diagnostic::Reporter;
use lox_ir::{Literal, Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::LexError;

/// Scanner over one source string.
///
/// Good for exactly one scan: [`Scanner::scan`] consumes the scanner.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
    /// First byte of the lexeme being built.
    start: usize,
    /// Line on which the lexeme being built starts.
    start_line: u32,
    /// Current 1-based line.
    line: u32,
    /// Byte offset where the current line begins, for columns.
    line_start: usize,
    /// Errors reported during this scan.
    errors: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            start: 0,
            start_line: 1,
            line: 1,
            line_start: 0,
            errors: 0,
        }
    }

    /// Scan the whole source, reporting malformed input to `reporter`.
    ///
    /// Always returns a non-empty sequence whose last element is the
    /// `EOF` token.
    pub fn scan<R: Reporter + ?Sized>(mut self, reporter: &mut R) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.start_line = self.line;
            self.scan_token(reporter);
        }

        let end = self.cursor.pos();
        let eof = Token::eof(self.line, Span::from_range(end..end).start);
        self.tokens.push(eof);

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.line,
            "scan complete"
        );
        self.tokens
    }

    fn scan_token<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        match self.cursor.bump() {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => self.one_or_two(TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.one_or_two(TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.one_or_two(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.one_or_two(TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => self.slash_or_comment(),
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.newline(),
            b'"' => self.string(reporter),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            _ => self.unexpected_character(reporter),
        }
    }

    // ─── Token construction ─────────────────────────────────────────

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, Literal::None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let span = Span::from_range(self.start..self.cursor.pos());
        let lexeme = self.cursor.slice_from(self.start);
        trace!(%kind, lexeme, line = self.start_line, "token");
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.start_line, span));
    }

    /// 1-based byte column of `offset` on the current line.
    fn column_of(&self, offset: usize) -> u32 {
        u32::try_from(offset - self.line_start + 1).unwrap_or(u32::MAX)
    }

    fn report<R: Reporter + ?Sized>(&mut self, reporter: &mut R, error: &LexError) {
        debug!(%error, "lex error");
        self.errors += 1;
        reporter.report(error.to_diagnostic());
    }

    // ─── Operators & trivia ─────────────────────────────────────────

    /// Emit `two` if the next byte is `=`, otherwise `one`.
    fn one_or_two(&mut self, two: TokenKind, one: TokenKind) {
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.add_token(two);
        } else {
            self.add_token(one);
        }
    }

    fn slash_or_comment(&mut self) {
        if self.cursor.current() == b'/' {
            // The newline stays unread so `newline()` counts it.
            self.cursor.eat_until_newline_or_eof();
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn newline(&mut self) {
        self.line = self.line.saturating_add(1);
        self.line_start = self.cursor.pos();
    }

    // ─── Literals ───────────────────────────────────────────────────

    fn string<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        let breaks = self.cursor.eat_until_quote_or_eof();
        self.line = self.line.saturating_add(breaks.count);
        if let Some(line_start) = breaks.last_line_start {
            self.line_start = line_start;
        }

        if self.cursor.is_eof() {
            let end = self.cursor.pos();
            let error = LexError::unterminated_string(
                self.line,
                self.column_of(end),
                Span::from_range(self.start..end),
            );
            self.report(reporter, &error);
            return;
        }

        // Closing quote.
        self.cursor.advance();
        let value = self.cursor.slice(self.start + 1, self.cursor.pos() - 1);
        self.add_literal_token(TokenKind::String, Literal::String(value.to_owned()));
    }

    fn number(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // A `.` only belongs to the number when a digit follows it;
        // otherwise it is left for the next token (`123.` is NUMBER DOT).
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let text = self.cursor.slice_from(self.start);
        // `[0-9]+(\.[0-9]+)?` is always valid `f64` syntax.
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // ─── Errors ─────────────────────────────────────────────────────

    fn unexpected_character<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        // Swallow UTF-8 continuation bytes so a multi-byte character is
        // reported once, as a whole.
        self.cursor.eat_while(|b| b & 0xC0 == 0x80);

        let text = self.cursor.slice_from(self.start);
        let found = text.chars().next().unwrap_or('\u{FFFD}');
        let error = LexError::unexpected_character(
            found,
            self.line,
            self.column_of(self.start),
            Span::from_range(self.start..self.cursor.pos()),
        );
        self.report(reporter, &error);
    }
}
