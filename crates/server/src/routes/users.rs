//! Profile CRUD endpoints.

use crate::error::ServerResult;
use crate::extract::{AppJson, AppPath};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use profile::{NewProfile, ProfileId, ProfilePatch};
use serde::Deserialize;
use std::sync::Arc;
use store::{ProfileStore, DEFAULT_LIST_LIMIT};

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: usize,

    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

/// Create a user. Emails are unique, ignoring case.
pub async fn create_user(
    State(state): State<Arc<ServerState>>,
    AppJson(payload): AppJson<NewProfile>,
) -> ServerResult<impl IntoResponse> {
    let created = state.engine.store().create(payload)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List users in id order.
pub async fn list_users(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> ServerResult<impl IntoResponse> {
    let users = state.engine.store().list(query.skip, query.limit)?;
    Ok(Json(users))
}

/// Fetch a single user.
pub async fn get_user(
    State(state): State<Arc<ServerState>>,
    AppPath(user_id): AppPath<u64>,
) -> ServerResult<impl IntoResponse> {
    let user = state.engine.store().resolve(ProfileId(user_id))?;
    Ok(Json(user))
}

/// Partially update a user; only fields present in the body change.
pub async fn update_user(
    State(state): State<Arc<ServerState>>,
    AppPath(user_id): AppPath<u64>,
    AppJson(patch): AppJson<ProfilePatch>,
) -> ServerResult<impl IntoResponse> {
    let user = state.engine.store().update(ProfileId(user_id), patch)?;
    Ok(Json(user))
}

/// Delete a user.
pub async fn delete_user(
    State(state): State<Arc<ServerState>>,
    AppPath(user_id): AppPath<u64>,
) -> ServerResult<impl IntoResponse> {
    state.engine.store().delete(ProfileId(user_id))?;
    Ok(StatusCode::NO_CONTENT)
}
