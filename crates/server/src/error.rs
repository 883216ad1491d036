use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use matcher::MatchError;
use profile::ProfileError;
use serde::{Deserialize, Serialize};
use store::StoreError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ProfileError),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Engine error: {0}")]
    Engine(#[from] peerconnect::EngineError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            ServerError::Validation(_) | ServerError::InvalidPayload(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Engine(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Validation(_) | ServerError::InvalidPayload(_) => "VALIDATION_ERROR",
            ServerError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            ServerError::NotFound(_) => "NOT_FOUND",
            ServerError::Engine(_) => "ENGINE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServerError::NotFound(format!("User {id} not found.")),
            StoreError::DuplicateEmail(email) => ServerError::DuplicateEmail(email),
            StoreError::Invalid(err) => ServerError::Validation(err),
            StoreError::Backend(msg) => ServerError::Internal(msg),
        }
    }
}

impl From<MatchError> for ServerError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::NotFound(id) => ServerError::NotFound(format!("User {id} not found.")),
            MatchError::SelfComparison(_) => ServerError::BadRequest(err.to_string()),
            MatchError::InvalidConfig(msg) => ServerError::Config(msg),
            MatchError::Store(err) => err.into(),
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile::ProfileId;

    #[test]
    fn store_errors_map_to_http_statuses() {
        let cases = [
            (StoreError::NotFound(ProfileId(1)), StatusCode::NOT_FOUND),
            (
                StoreError::DuplicateEmail("a@example.com".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::Invalid(ProfileError::InvalidEmail("x".into())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                StoreError::Backend("poisoned lock".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ServerError::from(err).status_code(), status);
        }
    }

    #[tokio::test]
    async fn response_body_uses_error_envelope() {
        use http_body_util::BodyExt;

        let response = ServerError::DuplicateEmail("a@example.com".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "DUPLICATE_EMAIL");
        assert_eq!(
            body.error.message,
            "Email already registered: a@example.com"
        );
    }

    #[test]
    fn match_errors_map_to_http_statuses() {
        assert_eq!(
            ServerError::from(MatchError::NotFound(ProfileId(7))).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::from(MatchError::SelfComparison(ProfileId(7))).error_code(),
            "BAD_REQUEST"
        );
        assert_eq!(
            ServerError::from(MatchError::Store(StoreError::Backend("x".into()))).error_code(),
            "INTERNAL_ERROR"
        );
    }
}
