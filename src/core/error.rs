use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::core::database::{StoreError, UniqueField};
use crate::shared::types::ErrorResponse;
use crate::shared::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request body: {0}")]
    MalformedInput(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Duplicate {0}")]
    Duplicate(UniqueField),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Non-duplicate store failure; `message` is what the client sees
    #[error("Persistence error: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Translate a store failure, keeping `message` as the generic 500 text
    pub fn from_store(message: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(field) => AppError::Duplicate(field),
            source => AppError::Persistence { message, source },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MalformedInput(ref detail) => {
                tracing::debug!("Rejected malformed body: {}", detail);
                (StatusCode::BAD_REQUEST, "Invalid JSON".to_string())
            }
            AppError::Validation(ref err) => {
                tracing::debug!(field = err.field(), "Validation failed: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Duplicate(field) => {
                let message = match field {
                    UniqueField::Username => "Username already exists",
                    UniqueField::Email => "Email already exists",
                };
                (StatusCode::CONFLICT, message.to_string())
            }
            AppError::Hashing(ref detail) => {
                tracing::error!("Password hashing error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to hash password".to_string(),
                )
            }
            AppError::Persistence {
                message,
                ref source,
            } => {
                tracing::error!("Database error: {:?}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_malformed_input_hides_parser_detail() {
        let (status, body) =
            render(AppError::MalformedInput("expected value at line 1".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid JSON");
    }

    #[tokio::test]
    async fn test_validation_uses_rule_message() {
        let (status, body) = render(ValidationError::PasswordTooShort { min: 8 }.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Password must be at least 8 characters");
    }

    #[tokio::test]
    async fn test_duplicates_map_to_conflict() {
        let (status, body) = render(AppError::Duplicate(UniqueField::Username)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.error, "Username already exists");

        let (status, body) = render(AppError::Duplicate(UniqueField::Email)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.error, "Email already exists");
    }

    #[tokio::test]
    async fn test_hashing_failure_is_generic() {
        let (status, body) = render(AppError::Hashing("out of memory".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to hash password");
    }

    #[tokio::test]
    async fn test_store_errors_never_leak_backend_text() {
        let err = AppError::from_store(
            "Failed to create user",
            StoreError::Database(sqlx::Error::Protocol("connection reset".to_string())),
        );
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to create user");
    }

    #[test]
    fn test_from_store_keeps_duplicate_field() {
        let err = AppError::from_store(
            "Failed to create user",
            StoreError::Duplicate(UniqueField::Username),
        );
        assert!(matches!(err, AppError::Duplicate(UniqueField::Username)));
    }
}
