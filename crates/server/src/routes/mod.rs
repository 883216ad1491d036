//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Liveness, readiness and server metadata
//! - `users`: Profile create / list / get / patch / delete
//! - `matching`: Match sets, ranked recommendations and pairwise checks

pub mod health;
pub mod matching;
pub mod users;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "PeerConnect API",
///   "version": "0.1.0",
///   "message": "PeerConnect API is live",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "PeerConnect API",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "PeerConnect API is live",
        "endpoints": [
            "/users",
            "/users/{id}",
            "/users/match/{id}",
            "/users/recommend/{id}",
            "/users/{id}/match/{candidate_id}",
            "/health",
            "/ready",
            "/metadata"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound("Route not found.".to_string())
}
