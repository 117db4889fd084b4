//! Error types and error handling for the lexer.
//!
//! This module defines the diagnostics the scanner reports while it
//! keeps going. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each lexical failure
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
