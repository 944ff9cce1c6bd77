//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// A reload cycle failed
    Review(ReviewError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Review(err) = self;
        let (status, error) = match &err {
            ReviewError::Fetch { path, .. } | ReviewError::Parse { path, .. } => (
                StatusCode::BAD_GATEWAY,
                ApiError::new(err.code(), err.to_string()).with_details(path.clone()),
            ),
            ReviewError::Render(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new(err.code(), err.to_string()),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        AppError::Review(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_maps_to_bad_gateway() {
        let response = AppError::from(ReviewError::fetch("out/drafts.json", 500)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_parse_error_body_names_the_document() {
        let response =
            AppError::from(ReviewError::parse("data/events_delta.json", "eof")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "PARSE_ERROR");
        assert_eq!(json["details"], "data/events_delta.json");
    }

    #[test]
    fn test_render_fault_maps_to_internal() {
        let response = AppError::from(ReviewError::Render("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_details_skipped_when_absent() {
        let json = serde_json::to_value(ApiError::new("X", "y")).unwrap();
        assert!(json.get("details").is_none());
    }
}
