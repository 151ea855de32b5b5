use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::db::{Db, PositionStore};
use crate::error::{Error, Result};
use crate::provider;
use crate::state::AppState;
use crate::web;

/// Connects to the database and makes sure the table exists. Failure here is
/// fatal for both binaries.
pub async fn open_database(config: &Config) -> Result<Db> {
    let db = Db::new(&config.database.url).await?;
    db.ensure_schema().await?;
    info!("✅ fii_positions table ready ({} records)", db.count().await?);
    Ok(db)
}

pub async fn run(config: Config) -> Result<()> {
    info!("📈 FII dashboard starting");
    info!("================================");

    let db = open_database(&config).await?;
    let provider = provider::from_config(&config.provider)?;
    let state = AppState::new(db, provider);

    let app = web::router(state);

    let listener = TcpListener::bind(config.server.bind_addr).await?;
    info!("Listening on http://{}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Other(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
