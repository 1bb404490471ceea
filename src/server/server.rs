use std::net::SocketAddr;

use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::errors::errors::Error;
use crate::report::report::{analyze, SourceReport};

/// Request body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub code: String,
}

/// One lexeme/kind pair of the token stream.
#[derive(Debug, Serialize)]
pub struct TokenEntry {
    pub lexeme: String,
    pub token: String,
}

/// One line of the submitted source with its diagnostic.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub code: String,
    pub result: String,
}

/// Response body: the token stream and one result entry per line of the
/// submitted string.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub tokens: Vec<TokenEntry>,
    pub results: Vec<LineResult>,
}

impl From<SourceReport> for AnalyzeResponse {
    fn from(report: SourceReport) -> AnalyzeResponse {
        AnalyzeResponse {
            tokens: report
                .tokens
                .iter()
                .map(|t| TokenEntry {
                    lexeme: t.lexeme.clone(),
                    token: t.kind.to_string(),
                })
                .collect(),
            results: report
                .lines
                .into_iter()
                .map(|line| LineResult {
                    result: line.diagnostic.to_string(),
                    code: line.text,
                })
                .collect(),
        }
    }
}

/// Runs both core operations on the submitted string. Each request carries
/// its own input and shares nothing with other requests.
pub async fn analyze_handler(Json(request): Json<AnalyzeRequest>) -> Json<AnalyzeResponse> {
    tracing::debug!(bytes = request.code.len(), "analyze request");
    Json(AnalyzeResponse::from(analyze(&request.code)))
}

/// The application router: a single stateless route.
pub fn router() -> Router {
    Router::new().route("/analyze", post(analyze_handler))
}

/// Blocking entry point for the CLI: parses the bind address, builds the
/// runtime, and serves until interrupted.
pub fn serve(addr: &str) -> Result<(), Error> {
    let addr: SocketAddr = addr.parse().map_err(|source| Error::BindAddress {
        addr: addr.to_string(),
        source,
    })?;

    let runtime = Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("listening on {addr}");
        axum::serve(listener, router()).await?;
        Ok(())
    })
}
