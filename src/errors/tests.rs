//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '$',
            line: 3,
        },
        Position(10, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.cl".to_string()));
    let error = Error::new(ErrorImpl::UnterminatedString { line: 1 }, pos.clone());

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_unterminated_comment_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedComment { line: 7 },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.get_line(), 7);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
            line: 2,
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(error
        .get_tip()
        .to_string()
        .contains("99999999999999999999"));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '#',
            line: 1,
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnterminatedComment { line: 1 },
        Position(0, Rc::new("test.cl".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(message) => assert!(message.contains("*)")),
        ErrorTip::None => panic!("Expected a suggestion"),
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '$',
            line: 4,
        },
        Position(0, Rc::new("main.cl".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "main.cl: illegal character '$' on line 4"
    );
}

#[test]
fn test_error_impl_display() {
    assert_eq!(
        ErrorImpl::UnterminatedString { line: 9 }.to_string(),
        "unterminated string literal on line 9"
    );
    assert_eq!(
        ErrorImpl::NumberParseError {
            token: "123".to_string(),
            line: 1
        }
        .to_string(),
        "error parsing integer \"123\" on line 1"
    );
}

#[test]
fn test_error_source_is_kind() {
    use std::error::Error as _;

    let error = Error::new(
        ErrorImpl::UnterminatedString { line: 2 },
        Position::null(),
    );

    let source = error.source().map(|source| source.to_string());
    assert_eq!(
        source.as_deref(),
        Some("unterminated string literal on line 2")
    );
}
