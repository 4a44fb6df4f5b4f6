//! Token types produced by the Lox scanner.
//!
//! A [`Token`] is an immutable value: kind, the exact source text it was
//! scanned from, an optional decoded [`Literal`], and the 1-based line on
//! which it starts.

use std::fmt;

use super::Span;

/// Lexical category of a token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Canonical upper-snake spelling, as shown in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Fun => "FUN",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whether this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Whether tokens of this kind carry a decoded [`Literal`].
    pub fn has_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value carried by `STRING` and `NUMBER` tokens.
///
/// Every other token carries [`Literal::None`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Literal {
    #[default]
    None,
    /// Text between the quotes, stored verbatim (no escape processing).
    String(String),
    Number(f64),
}

impl Literal {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("nil"),
            Literal::String(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A classified unit of lexical output.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text the token was scanned from.
    pub lexeme: String,
    pub literal: Literal,
    /// 1-based line of the token's first character.
    pub line: u32,
    pub span: Span,
}

impl Token {
    /// Build a token. Only `STRING` and `NUMBER` may carry a literal.
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: u32,
        span: Span,
    ) -> Self {
        debug_assert_eq!(
            kind.has_literal(),
            !literal.is_none(),
            "{kind} token with literal {literal:?}"
        );
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The END-OF-INPUT token: empty lexeme, no literal.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: Literal::None,
            line,
            span: Span::point(offset),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)?;
        if !self.literal.is_none() {
            write!(f, " {}", self.literal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
