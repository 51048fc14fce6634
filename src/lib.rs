pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod recipes;
pub mod state;
pub mod users;

/// Compiled-in schema migrations, shared by `main` and the test suites.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
