//! Lox IR - shared front-end data types.
//!
//! This crate holds the values that flow out of the lexer:
//! - [`Span`] for byte ranges in source text
//! - [`Token`], [`TokenKind`] and [`Literal`] for scanner output
//!
//! Tokens own their lexeme text, so a token sequence outlives both the
//! scanner that produced it and the source string it was scanned from.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Literal, Token, TokenKind};
