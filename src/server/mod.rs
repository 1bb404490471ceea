//! HTTP endpoint for the kaChing front end.
//!
//! A single stateless route, `POST /analyze`, that re-runs the two core
//! operations (tokenize, per-line validate) on a JSON-submitted source
//! string. No authentication, no persisted state across requests.

pub mod server;
