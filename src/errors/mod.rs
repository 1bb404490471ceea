//! Error types for the kaChing front end shell.
//!
//! Lexical and syntactic problems are data (UNKNOWN tokens and per-line
//! diagnostics), not errors; this module only covers the boundary
//! collaborators — reading the source file and running the server.

pub mod errors;
