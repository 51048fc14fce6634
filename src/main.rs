use anyhow::Context;

use recipebook::app::{build_app, serve};
use recipebook::state::AppState;
use recipebook::MIGRATOR;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "recipebook=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;
    tracing::info!(
        track_modifications = state.config.track_modifications,
        "config loaded"
    );

    MIGRATOR
        .run(&state.db)
        .await
        .context("run database migrations")?;

    let app = build_app(state);
    serve(app).await
}
