//! Extractors whose rejections use the API error envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::ServerError;

/// `axum::Json` whose rejections use the API error envelope.
///
/// Well-formed JSON of the wrong shape is a validation failure; anything else
/// (syntax errors, missing content type) is a bad request.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` whose rejections use the API error envelope.
///
/// A path value of the wrong type (`/users/abc`) is a validation failure.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ServerError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ServerError::InvalidPayload(err.body_text()),
            other => ServerError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                ServerError::InvalidPayload(err.body_text())
            }
            other => ServerError::BadRequest(other.body_text()),
        }
    }
}
