//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the rule table:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a handler for fixed-text tokens
//! - `MK_TEXT_HANDLER!` - Creates a handler that keeps the matched text
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$line` - The line the token starts on
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(42), 1, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            span: $span,
        }
    };
}

/// Creates a handler for operators and punctuation with a fixed spelling.
///
/// Generates a handler function that creates a token with the given kind
/// and advances the lexer past the literal.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\A<-").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "<-"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer, _matched| {
            let token = MK_TOKEN!(
                $kind,
                TokenValue::Text(String::from($value)),
                lexer.line,
                lexer.span_of($value.len())
            );
            lexer.advance($value);
            Some(token)
        }
    };
}

/// Creates a handler whose token keeps the exact matched spelling.
///
/// Used for literals whose spelling varies between matches, such as the
/// case-insensitive `true` and `false`.
#[macro_export]
macro_rules! MK_TEXT_HANDLER {
    ($kind:expr) => {
        |lexer, matched| {
            let token = MK_TOKEN!(
                $kind,
                TokenValue::Text(String::from(matched)),
                lexer.line,
                lexer.span_of(matched.len())
            );
            lexer.advance(matched);
            Some(token)
        }
    };
}
