use axum::{extract::rejection::JsonRejection, http::StatusCode};
use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup failures; the server never binds when one of these occurs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to open workbook {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("failed to read sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },

    #[error("sheet '{0}' has no header row")]
    EmptySheet(String),

    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
