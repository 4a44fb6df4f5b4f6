use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_names_are_upper_snake() {
    assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
    assert_eq!(TokenKind::BangEqual.name(), "BANG_EQUAL");
    assert_eq!(TokenKind::GreaterEqual.name(), "GREATER_EQUAL");
    assert_eq!(TokenKind::Identifier.name(), "IDENTIFIER");
    assert_eq!(TokenKind::While.name(), "WHILE");
    assert_eq!(TokenKind::Eof.name(), "EOF");
    assert_eq!(TokenKind::Semicolon.to_string(), "SEMICOLON");
}

#[test]
fn keyword_classification() {
    assert!(TokenKind::And.is_keyword());
    assert!(TokenKind::While.is_keyword());
    assert!(TokenKind::Nil.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!TokenKind::Bang.is_keyword());
    assert!(!TokenKind::Eof.is_keyword());
}

#[test]
fn only_string_and_number_have_literals() {
    assert!(TokenKind::String.has_literal());
    assert!(TokenKind::Number.has_literal());
    assert!(!TokenKind::Identifier.has_literal());
    assert!(!TokenKind::True.has_literal());
}

#[test]
fn literal_display() {
    assert_eq!(Literal::None.to_string(), "nil");
    assert_eq!(Literal::String("hi there".into()).to_string(), "hi there");
    assert_eq!(Literal::Number(123.0).to_string(), "123");
    assert_eq!(Literal::Number(1.5).to_string(), "1.5");
}

#[test]
fn literal_accessors() {
    assert_eq!(Literal::String("x".into()).as_str(), Some("x"));
    assert_eq!(Literal::Number(2.0).as_str(), None);
    assert_eq!(Literal::Number(2.0).as_number(), Some(2.0));
    assert_eq!(Literal::None.as_number(), None);
    assert!(Literal::default().is_none());
}

#[test]
fn token_display_includes_literal_when_present() {
    let plus = Token::new(TokenKind::Plus, "+", Literal::None, 1, Span::new(0, 1));
    assert_eq!(plus.to_string(), "PLUS +");

    let string = Token::new(
        TokenKind::String,
        "\"hi\"",
        Literal::String("hi".into()),
        1,
        Span::new(0, 4),
    );
    assert_eq!(string.to_string(), "STRING \"hi\" hi");

    let number = Token::new(
        TokenKind::Number,
        "12.50",
        Literal::Number(12.5),
        3,
        Span::new(9, 14),
    );
    assert_eq!(number.to_string(), "NUMBER 12.50 12.5");
}

#[test]
fn eof_token_shape() {
    let eof = Token::eof(4, 30);
    assert!(eof.is_eof());
    assert_eq!(eof.lexeme, "");
    assert_eq!(eof.literal, Literal::None);
    assert_eq!(eof.line, 4);
    assert_eq!(eof.span, Span::point(30));
    assert_eq!(eof.to_string(), "EOF ");
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "STRING token with literal None")]
fn string_token_without_literal_is_rejected() {
    let _ = Token::new(TokenKind::String, "\"\"", Literal::None, 1, Span::new(0, 2));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "IDENTIFIER token with literal Number(1.0)")]
fn identifier_token_with_literal_is_rejected() {
    let _ = Token::new(
        TokenKind::Identifier,
        "x",
        Literal::Number(1.0),
        1,
        Span::new(0, 1),
    );
}
