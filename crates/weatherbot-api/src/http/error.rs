//! Application error type mapping to HTTP status codes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use weatherbot_types::error::RepositoryError;

#[derive(Debug)]
pub enum AppError {
    /// No log rows for the requested user.
    LogsNotFound,
    /// Storage failure; the cause is logged, never returned.
    Repository(RepositoryError),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::LogsNotFound => (StatusCode::NOT_FOUND, "Logs not found"),
            AppError::Repository(e) => {
                tracing::error!(error = %e, "Log query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_body() {
        let response = AppError::LogsNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Logs not found"}));
    }

    #[tokio::test]
    async fn repository_error_hides_cause() {
        let response =
            AppError::from(RepositoryError::Query("no such table: logs".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({"detail": "Internal server error"}));
    }
}
