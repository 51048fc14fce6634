use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Recipe {
    pub recipe_id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

impl Recipe {
    pub async fn list(db: &SqlitePool) -> Result<Vec<Recipe>, sqlx::Error> {
        sqlx::query_as::<_, Recipe>(
            r#"
            SELECT recipe_id, title, body, user_id
            FROM recipes
            ORDER BY recipe_id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &SqlitePool, recipe_id: i64) -> Result<Option<Recipe>, sqlx::Error> {
        sqlx::query_as::<_, Recipe>(
            r#"
            SELECT recipe_id, title, body, user_id
            FROM recipes
            WHERE recipe_id = ?
            "#,
        )
        .bind(recipe_id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> Result<Vec<Recipe>, sqlx::Error> {
        sqlx::query_as::<_, Recipe>(
            r#"
            SELECT recipe_id, title, body, user_id
            FROM recipes
            WHERE user_id = ?
            ORDER BY recipe_id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn create(
        db: &SqlitePool,
        title: &str,
        body: &str,
        user_id: i64,
    ) -> Result<Recipe, sqlx::Error> {
        sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (title, body, user_id)
            VALUES (?, ?, ?)
            RETURNING recipe_id, title, body, user_id
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    /// Full overwrite of the mutable fields, not a partial patch.
    pub async fn update(
        db: &SqlitePool,
        recipe_id: i64,
        title: &str,
        body: &str,
        user_id: i64,
    ) -> Result<Recipe, sqlx::Error> {
        sqlx::query_as::<_, Recipe>(
            r#"
            UPDATE recipes
            SET title = ?, body = ?, user_id = ?
            WHERE recipe_id = ?
            RETURNING recipe_id, title, body, user_id
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(user_id)
        .bind(recipe_id)
        .fetch_one(db)
        .await
    }

    /// Returns the number of rows removed; deleting an absent id is a no-op.
    /// Never touches the owning user.
    pub async fn delete_by_id(db: &SqlitePool, recipe_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM recipes
            WHERE recipe_id = ?
            "#,
        )
        .bind(recipe_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
