use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use candlelens_core::AnalyzeError;
use serde::Serialize;
use thiserror::Error;

/// API-level error categories mapped to HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("symbol is required")]
    InvalidSymbol,
    #[error("days must be an integer")]
    InvalidDays,
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidSymbol | Self::InvalidDays => StatusCode::BAD_REQUEST,
            Self::Analyze(AnalyzeError::EmptySymbol) => StatusCode::BAD_REQUEST,
            Self::Analyze(AnalyzeError::NoData { .. }) => StatusCode::NOT_FOUND,
            Self::Analyze(AnalyzeError::Fetch(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "analysis request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
