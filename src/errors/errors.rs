use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_line(&self) -> u32 {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { line, .. }
            | ErrorImpl::UnterminatedString { line }
            | ErrorImpl::UnterminatedComment { line }
            | ErrorImpl::NumberParseError { line, .. } => *line,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "Missing closing `\"`, use `\\` before a newline to continue a string",
            )),
            ErrorImpl::UnterminatedComment { .. } => {
                ErrorTip::Suggestion(String::from("Missing closing `*)` for block comment"))
            }
            ErrorImpl::NumberParseError { token, .. } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position.1, self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character {character:?} on line {line}")]
    IllegalCharacter { character: char, line: u32 },
    #[error("unterminated string literal on line {line}")]
    UnterminatedString { line: u32 },
    #[error("unterminated block comment starting on line {line}")]
    UnterminatedComment { line: u32 },
    #[error("error parsing integer {token:?} on line {line}")]
    NumberParseError { token: String, line: u32 },
}
