use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("failed to store upload: {0}")]
    Storage(#[from] std::io::Error),

    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Multipart(err) => {
                // Keeps the framework's status, e.g. 413 once the body limit is hit.
                let status = err.status();
                log::warn!("Rejected multipart body ({}): {}", status, err.body_text());
                (status, err.body_text()).into_response()
            }
            other => {
                log::error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
