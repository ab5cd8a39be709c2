use crate::constants::PERSON_NOT_FOUND_MESSAGE;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced at the HTTP boundary. Read-path misses become 404s
/// with the fixed message; storage failures become generic 500s.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Person not found")]
    PersonNotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::PersonNotFound => {
                (StatusCode::NOT_FOUND, PERSON_NOT_FOUND_MESSAGE.to_string())
            }
            ApiError::Internal(err) => {
                tracing::error!("request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_envelope_is_fixed() {
        let response = ApiError::PersonNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "error", "message": "Person not found"})
        );
    }

    #[tokio::test]
    async fn internal_errors_become_500() {
        let response = ApiError::Internal(anyhow::anyhow!("pool closed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        // Storage failures never leak details to the client
        assert_eq!(body["message"], "Internal server error");
    }
}
