use std::sync::Arc;

use anyhow::Context;
use marquee::{AppState, config::Config, db, router, store::MovieStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,marquee=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(database_url = %config.database_url, "opening movie store");
    let db = db::connect(&config.database_url, config.db_max_connections, true)
        .await
        .context("connecting to movie store")?;
    let store = MovieStore::new(db);

    let count = store.count().await.context("counting movies")?;
    tracing::info!(movie_count = count, "movie store ready");

    let app = router(Arc::new(AppState { store }));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
