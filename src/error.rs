//! Service error type and its HTTP mapping.
//!
//! One enum covers every failure the operations can hit. Awaited request paths
//! surface it through the `IntoResponse` impl as a JSON `{"error": ...}` body;
//! detached tasks log it instead (the client already has its response).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A CSV line with fewer than 4 comma-separated fields. Aborts the whole
    /// file's ingestion for that request.
    #[error("malformed CSV record on line {line}: expected at least 4 comma-separated fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("multipart upload error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The worker running a task panicked or was cancelled.
    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::MalformedRecord { .. } | Error::Csv(_) | Error::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Database(_) | Error::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
