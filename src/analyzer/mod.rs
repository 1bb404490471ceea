//! Per-line syntax validation for the kaChing front end.
//!
//! This module contains the validator that checks one line's token list
//! against a fixed menu of statement shapes. It handles:
//!
//! - Typed declarations with literal/type matching
//! - Conditionals, `else` chaining, `for` and `while` loops
//! - Data-binding regions and `print`
//! - Reserved-word invocations for the financial vocabulary
//! - A generic positional matcher driven by shape descriptions
//!
//! Every outcome is classified text; the validator never fails and never
//! looks beyond the tokens of the single line it was given.

pub mod analyzer;
pub mod shapes;

#[cfg(test)]
mod tests;
