#![allow(clippy::unwrap_used)]

use super::*;

// === Reserved keyword tests ===

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("for"), Some(TokenKind::For));
    assert_eq!(lookup("while"), Some(TokenKind::While));
    assert_eq!(lookup("return"), Some(TokenKind::Return));
}

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("var"), Some(TokenKind::Var));
    assert_eq!(lookup("fun"), Some(TokenKind::Fun));
    assert_eq!(lookup("class"), Some(TokenKind::Class));
}

#[test]
fn value_keywords() {
    assert_eq!(lookup("true"), Some(TokenKind::True));
    assert_eq!(lookup("false"), Some(TokenKind::False));
    assert_eq!(lookup("nil"), Some(TokenKind::Nil));
    assert_eq!(lookup("this"), Some(TokenKind::This));
    assert_eq!(lookup("super"), Some(TokenKind::Super));
}

#[test]
fn operator_and_builtin_keywords() {
    assert_eq!(lookup("and"), Some(TokenKind::And));
    assert_eq!(lookup("or"), Some(TokenKind::Or));
    assert_eq!(lookup("print"), Some(TokenKind::Print));
}

// === Non-keyword tests ===

#[test]
fn prefixes_and_extensions_are_not_keywords() {
    assert_eq!(lookup("classroom"), None);
    assert_eq!(lookup("fo"), None);
    assert_eq!(lookup("orchid"), None);
    assert_eq!(lookup("returns"), None);
    assert_eq!(lookup("i"), None);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("CLASS"), None);
    assert_eq!(lookup("Nil"), None);
}

#[test]
fn empty_and_long_text() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("averyveryverylongidentifier"), None);
}

// === Table consistency ===

#[test]
fn every_reserved_spelling_resolves_to_a_keyword_kind() {
    for spelling in RESERVED {
        let kind = lookup(spelling);
        assert!(
            kind.is_some_and(TokenKind::is_keyword),
            "`{spelling}` should resolve to a keyword, got {kind:?}"
        );
    }
}

#[test]
fn reserved_spellings_match_kind_names() {
    for spelling in RESERVED {
        let kind = lookup(spelling).unwrap();
        assert_eq!(kind.name(), spelling.to_ascii_uppercase());
    }
}
