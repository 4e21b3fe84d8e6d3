// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed (TLS backend, resolver, ...).
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// No response was received (DNS, refused connection, reset, ...).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backend returned an empty body")]
    EmptyBody,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no stock selected for editing")]
    NoEditTarget,
    #[error(transparent)]
    Api(#[from] ApiError),
}
