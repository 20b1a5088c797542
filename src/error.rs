use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::ranking::RankError;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidMode(#[from] RankError),
    #[error("missing `type` query parameter, expected one of: magic, physical, value")]
    MissingMode,
    #[error("malformed query string: {0}")]
    BadQuery(#[from] QueryRejection),
    #[error("sheet source is not configured")]
    NotConfigured,
    #[error("failed to load sheet: {0:#}")]
    Upstream(anyhow::Error),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidMode(_) | ApiError::MissingMode | ApiError::BadQuery(_) => {
                "INVALID_MODE"
            }
            ApiError::NotConfigured => "NOT_CONFIGURED",
            ApiError::Upstream(_) => "UPSTREAM_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidMode(_) | ApiError::MissingMode | ApiError::BadQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code(),
        };
        (status, Json(body)).into_response()
    }
}
