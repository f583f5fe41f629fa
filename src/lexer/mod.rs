//! Lexical analysis module.
//!
//! This module contains the lexer that turns program text into a
//! pull-based stream of classified tokens. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, constants and operators
//! - Line tracking for diagnostics and the parse trace
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
