use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::dto::RecipePayload;
use super::repo::Recipe;
use crate::error::{ApiError, ValidJson};
use crate::state::AppState;

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipe", post(create_recipe))
        .route(
            "/recipe/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/recipe-from/:id", get(list_recipes_from_user))
}

#[instrument(skip(state))]
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(Recipe::list(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = Recipe::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("recipe {id} not found")))?;
    Ok(Json(recipe))
}

/// All recipes owned by user {id}.
#[instrument(skip(state))]
pub async fn list_recipes_from_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(Recipe::list_by_user(&state.db, id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RecipePayload>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe =
        Recipe::create(&state.db, &payload.title, &payload.body, payload.user_id).await?;
    info!(recipe_id = recipe.recipe_id, user_id = recipe.user_id, "recipe created");
    Ok(Json(recipe))
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<RecipePayload>,
) -> Result<Json<Recipe>, ApiError> {
    if Recipe::find_by_id(&state.db, id).await?.is_none() {
        warn!(recipe_id = id, "update for missing recipe");
        return Err(ApiError::DoesNotExist("Recipe"));
    }
    let recipe =
        Recipe::update(&state.db, id, &payload.title, &payload.body, payload.user_id).await?;
    info!(recipe_id = recipe.recipe_id, "recipe updated");
    Ok(Json(recipe))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let removed = Recipe::delete_by_id(&state.db, id).await?;
    info!(recipe_id = id, removed, "recipe delete");
    Ok(Json(json!({ "deleted": removed > 0 })))
}
