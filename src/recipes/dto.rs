use serde::Deserialize;

/// Request body for POST /recipe and PUT /recipe/{id}. The owner is taken
/// at face value; referential integrity is the storage engine's job.
#[derive(Debug, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}
