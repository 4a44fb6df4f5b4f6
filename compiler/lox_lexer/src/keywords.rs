//! Reserved-word table.
//!
//! Lookup is an exact, case-sensitive match on the whole lexeme. The
//! scanner finishes the identifier before asking, so `classroom` is never
//! split into `class` + `room`.
//!
//! The table is a compiled `match`, bucketed by length: identifiers whose
//! length falls outside 2-6 are rejected without any comparison.

use lox_ir::TokenKind;

/// Every reserved spelling, in alphabetical order.
pub const RESERVED: [&str; 16] = [
    "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "super",
    "this", "true", "var", "while",
];

/// Look up a reserved word by its exact spelling.
///
/// Returns `None` for anything that is not a keyword, which the scanner
/// turns into an `IDENTIFIER`.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
