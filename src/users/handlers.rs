use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::dto::UserPayload;
use super::repo::User;
use crate::auth::password::hash_password;
use crate::error::{ApiError, ValidJson};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(User::list(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("user {id} not found")))?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.email, &hash).await?;
    info!(user_id = user.user_id, email = %user.email, "user created");
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<Json<User>, ApiError> {
    if User::find_by_id(&state.db, id).await?.is_none() {
        warn!(user_id = id, "update for missing user");
        return Err(ApiError::DoesNotExist("User"));
    }
    let hash = hash_password(&payload.password)?;
    let user = User::update(&state.db, id, &payload.email, &hash).await?;
    info!(user_id = user.user_id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let removed = User::delete_by_id(&state.db, id).await?;
    info!(user_id = id, removed, "user delete");
    Ok(Json(json!({ "deleted": removed > 0 })))
}
