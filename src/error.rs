//! Error types for the users service
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; everything here comes from request validation or the database.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// A database call failed; `context` is the client-facing message
    #[error("{context}: {source}")]
    Database {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    /// Request body was missing, not JSON, or did not match the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    /// Wraps a database error with the message reported to the client.
    pub fn database(context: impl Into<String>) -> impl FnOnce(sqlx::Error) -> Self {
        let context = context.into();
        move |source| ApiError::Database { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ApiError::Validation(message) => ErrorResponse::new(message, None),
            ApiError::Database { context, source } => {
                error!(error = %source, "{}", context);
                ErrorResponse::new(context, Some(source.to_string()))
            }
            ApiError::InvalidBody(rejection) => {
                ErrorResponse::new("Invalid request body", Some(rejection.body_text()))
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::rejection::MissingJsonContentType;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("Name is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let db = ApiError::database("There was an error retrieving users")(sqlx::Error::RowNotFound);
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_body_keeps_rejection_status() {
        let rejection = JsonRejection::from(MissingJsonContentType::default());
        let err = ApiError::from(rejection);
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_database_error_display_keeps_source() {
        let err = ApiError::database("There was an error deleting the user")(sqlx::Error::PoolTimedOut);
        let text = err.to_string();
        assert!(text.starts_with("There was an error deleting the user: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Validation("Name is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
