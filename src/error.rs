//! Request validation errors.
//!
//! All validation happens at the HTTP boundary. Each variant renders as
//! HTTP 400 with a JSON body; search-side errors also carry a zero timing so
//! the front-end can render them like a normal search result.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Parameter 'size' diperlukan")]
    MissingSize,

    #[error("Ukuran harus angka antara 1-50000")]
    InvalidSize(String),

    #[error("Parameter 'npm' diperlukan")]
    MissingKey,

    #[error("NPM harus berupa angka")]
    InvalidKey(String),
}

/// Body of every 400 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waktu_microdetik: Option<u64>,
}

impl ValidationError {
    fn is_search_error(&self) -> bool {
        matches!(self, Self::MissingKey | Self::InvalidKey(_))
    }

    pub fn payload(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            waktu_microdetik: self.is_search_error().then_some(0),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.payload())).into_response()
    }
}
