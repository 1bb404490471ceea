use std::io;
use std::net::AddrParseError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the shell around the core. The core itself never fails:
/// unclassifiable lexemes degrade to UNKNOWN tokens and bad lines become
/// per-line diagnostics, so only file access and the server surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read source file {}: {source}", path.display())]
    ReadSource { path: PathBuf, source: io::Error },
    #[error("invalid bind address {addr:?}: {source}")]
    BindAddress {
        addr: String,
        source: AddrParseError,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
