use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words, keyed by their lowercase spelling.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("class", TokenKind::Class);
        map.insert("else", TokenKind::Else);
        map.insert("fi", TokenKind::Fi);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("inherits", TokenKind::Inherits);
        map.insert("isvoid", TokenKind::Isvoid);
        map.insert("let", TokenKind::Let);
        map.insert("loop", TokenKind::Loop);
        map.insert("pool", TokenKind::Pool);
        map.insert("then", TokenKind::Then);
        map.insert("while", TokenKind::While);
        map.insert("case", TokenKind::Case);
        map.insert("esac", TokenKind::Esac);
        map.insert("new", TokenKind::New);
        map.insert("of", TokenKind::Of);
        map.insert("not", TokenKind::Not);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Times,
    Divide,
    Equals,
    LessThan,
    LessOrEqual,
    Assignment, // <-
    Arrow,      // =>

    String,
    Integer,
    True,
    False,

    Colon,
    Dot,
    Comma,
    Semicolon,
    At,
    Tilde,
    LBracket, // {
    RBracket, // }
    LParen,
    RParen,

    Id,
    Type,
    SelfKw,

    // Reserved
    Class,
    Else,
    Fi,
    If,
    In,
    Inherits,
    Isvoid,
    Let,
    Loop,
    Pool,
    Then,
    While,
    Case,
    Esac,
    New,
    Of,
    Not,
}

impl TokenKind {
    /// The upper-case tag a downstream parser knows this kind by.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Equals => "EQUALS",
            TokenKind::LessThan => "LESSTHAN",
            TokenKind::LessOrEqual => "LESSOREQUAL",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Arrow => "ARROW",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::At => "AT",
            TokenKind::Tilde => "TILDE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Id => "ID",
            TokenKind::Type => "TYPE",
            TokenKind::SelfKw => "SELF",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::Fi => "FI",
            TokenKind::If => "IF",
            TokenKind::In => "IN",
            TokenKind::Inherits => "INHERITS",
            TokenKind::Isvoid => "ISVOID",
            TokenKind::Let => "LET",
            TokenKind::Loop => "LOOP",
            TokenKind::Pool => "POOL",
            TokenKind::Then => "THEN",
            TokenKind::While => "WHILE",
            TokenKind::Case => "CASE",
            TokenKind::Esac => "ESAC",
            TokenKind::New => "NEW",
            TokenKind::Of => "OF",
            TokenKind::Not => "NOT",
        }
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payload of a token: integers are decoded, everything else keeps its
/// source spelling (strings keep their quotes and escapes).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    Integer(i64),
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Text(text) => write!(f, "'{}'", text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Line the scanner was on when the token began. Newlines inside block
    /// comments do not advance it; `render_error` works from the byte
    /// offset and always shows the physical line.
    pub line: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LexToken({},{},{},{})",
            self.kind, self.value, self.line, self.span.start.0
        )
    }
}

impl Token {
    /// Textual form of the token; integers are rendered in base 10.
    pub fn lexeme(&self) -> String {
        match &self.value {
            TokenValue::Integer(value) => value.to_string(),
            TokenValue::Text(text) => text.clone(),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            TokenValue::Integer(value) => Some(value),
            TokenValue::Text(_) => None,
        }
    }
}
