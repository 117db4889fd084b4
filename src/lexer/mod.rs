//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of classified tokens for a parser. It handles:
//!
//! - Tokenization of source text using an ordered table of regex rules
//! - Classification of identifiers, keywords, type names and `self`
//! - Line tracking across newlines, block comments and continued strings
//! - Statistics on literals, comments and type names seen

pub mod lexer;
pub mod stats;
pub mod tokens;
