use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    /// Always an argon2 hash, never plaintext, and never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub async fn list(db: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password
            FROM users
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Email is not unique; take the first match by lowest user_id.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password
            FROM users
            WHERE email = ?
            ORDER BY user_id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &SqlitePool,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES (?, ?)
            RETURNING user_id, email, password
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Full overwrite of the mutable fields, not a partial patch.
    pub async fn update(
        db: &SqlitePool,
        user_id: i64,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = ?, password = ?
            WHERE user_id = ?
            RETURNING user_id, email, password
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    /// Returns the number of rows removed; deleting an absent id is a no-op.
    /// Owned recipes go with the user via the schema's ON DELETE CASCADE.
    pub async fn delete_by_id(db: &SqlitePool, user_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    async fn test_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        crate::MIGRATOR.run(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn create_then_find_roundtrip() {
        let db = test_pool().await;
        let created = User::create(&db, "a@x.com", "hash").await.unwrap();
        assert_eq!(created.user_id, 1);

        let found = User::find_by_id(&db, created.user_id).await.unwrap().unwrap();
        assert_eq!(found.email, "a@x.com");
        assert_eq!(found.password, "hash");
    }

    #[tokio::test]
    async fn find_by_email_takes_first_match_on_duplicates() {
        let db = test_pool().await;
        User::create(&db, "dup@x.com", "first").await.unwrap();
        User::create(&db, "dup@x.com", "second").await.unwrap();

        let found = User::find_by_email(&db, "dup@x.com").await.unwrap().unwrap();
        assert_eq!(found.user_id, 1);
        assert_eq!(found.password, "first");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let db = test_pool().await;
        let user = User::create(&db, "a@x.com", "hash").await.unwrap();

        assert_eq!(User::delete_by_id(&db, user.user_id).await.unwrap(), 1);
        assert_eq!(User::delete_by_id(&db, user.user_id).await.unwrap(), 0);
        assert_eq!(User::delete_by_id(&db, 999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn serialized_user_has_no_password_key() {
        let db = test_pool().await;
        let user = User::create(&db, "a@x.com", "hash").await.unwrap();

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["user_id"], 1);
    }
}
