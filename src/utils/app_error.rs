use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::overpass_service::types::fetch_error::FetchError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

/// Upstream trouble is the gateway's problem, not the caller's.
impl From<&FetchError> for AppError {
    fn from(e: &FetchError) -> Self {
        match e {
            FetchError::Transport { .. } => AppError::new(
                StatusCode::BAD_GATEWAY,
                "Failed to reach the golf course data source",
            ),
            FetchError::Parse(_) => AppError::new(
                StatusCode::BAD_GATEWAY,
                "Golf course data source returned an unreadable response",
            ),
            FetchError::Cancelled => AppError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Golf course lookup was cancelled",
            ),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponseJson {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
