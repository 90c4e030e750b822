//! Lexical analysis for Lox source text.
//!
//! This module contains the scanner that converts source code into a flat
//! stream of tokens for a parser. It handles:
//!
//! - Punctuation and one/two-character operators
//! - Number, string and identifier literals, with keyword lookup
//! - Line comments and whitespace
//! - Line tracking for error reporting

pub mod lexer;
pub mod tokens;
