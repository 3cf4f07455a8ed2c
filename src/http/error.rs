//! Error responses.
//!
//! Every upstream failure surfaces as `500 {"error":"Internal Server Error"}`. The cause is
//! logged and never written to the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn internal() -> Self {
        Self {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Handler failure, tagged with the pipeline stage that failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to fetch search results")]
    Search(#[source] UpstreamError),

    #[error("failed to fetch item")]
    Item(#[source] UpstreamError),

    #[error("failed to fetch item description")]
    Description(#[source] UpstreamError),
}

impl ApiError {
    pub fn upstream(&self) -> &UpstreamError {
        match self {
            ApiError::Search(e) | ApiError::Item(e) | ApiError::Description(e) => e,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.upstream(), "{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_response_hides_cause() {
        let err = ApiError::Item(UpstreamError::NotABase("secret-host".to_string()));
        assert_eq!(err.to_string(), "failed to fetch item");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"error":"Internal Server Error"}"#);
    }
}
