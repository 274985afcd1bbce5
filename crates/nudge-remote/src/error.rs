use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("failed to query the versions table: {0}")]
    Request(#[source] reqwest::Error),
    #[error("versions table query failed with HTTP {status}{body_snippet}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body_snippet: String,
    },
    #[error("failed to parse versions table response: {0}")]
    Parse(#[source] serde_json::Error),
}
