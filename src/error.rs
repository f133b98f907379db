//! Application error type and its JSON response mapping.
//!
//! The request pipeline is deliberately asymmetric: an invalid sign is the
//! only condition that produces a non-success response. Every provider-side
//! failure is absorbed inside the horoscope resolver and reaches the caller
//! only as `"source": "fallback"` metadata, so no variant here maps to a 5xx.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid zodiac sign: {0:?}")]
    InvalidSign(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidSign(sign) => {
                tracing::debug!(sign = %sign, "Rejected invalid zodiac sign");
                (StatusCode::BAD_REQUEST, "Invalid zodiac sign")
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sign_maps_to_bad_request() {
        let response = AppError::InvalidSign("banana".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
