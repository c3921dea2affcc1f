use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure of a single backend call made through [`crate::utils::QflowClient`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx answer. `message` is the response body, or a fallback naming the status code.
    #[error("{message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let message = if body.is_empty() {
            format!("Request failed with status {}", status.as_u16())
        } else {
            body
        };
        ApiError::Status { status, message }
    }
}

/// Failure while serving a page. Startup errors go through `anyhow` in `main`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to render page: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
