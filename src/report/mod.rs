//! Result aggregation and display for the kaChing front end.
//!
//! A thin orchestration layer over the two core components: it drives the
//! lexer and the validator across a whole source text and renders the
//! lexeme/token and line/diagnostic tables for the CLI.

pub mod report;
pub mod tables;
