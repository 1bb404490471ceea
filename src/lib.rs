//! Educational front end for the kaChing scripting language: a lexical
//! classifier and a per-line syntax validator for its financial-accounting
//! flavored DSL, with a file CLI and a JSON `/analyze` endpoint.
//!
//! The core (`lexer`, `analyzer`) is a pure function of the input string;
//! `report`, `server`, and the CLI are thin collaborators around it.

#![allow(clippy::module_inception)]

pub mod analyzer;
pub mod errors;
pub mod lexer;
pub mod report;
pub mod server;

extern crate regex;
