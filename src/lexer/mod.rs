//! Lexical analysis module for the kaChing front end.
//!
//! This module contains the lexical classifier that converts source text
//! into a stream of tokens. It handles:
//!
//! - Splitting lines into maximal lexemes
//! - Priority-ordered classification against a pattern table
//! - Keywords, reserved financial vocabulary, literals, and operators
//! - Single-line comments and multi-line comment spans
//! - Degrading unmatched lexemes to an unknown kind instead of failing

pub mod lexer;
pub mod tokens;
