//! Runs the daily ingestion once and exits. Meant to be driven by cron or a
//! systemd timer instead of page loads.

use anyhow::Context;
use tracing::info;

use fii_dashboard::app::open_database;
use fii_dashboard::config::Config;
use fii_dashboard::ingest::{ingest_today, IngestOutcome};
use fii_dashboard::logging::init;
use fii_dashboard::provider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();

    let config = Config::from_env().context("loading configuration")?;
    let db = open_database(&config).await.context("opening database")?;
    let provider = provider::from_config(&config.provider)?;

    let outcome = ingest_today(&db, provider.as_ref())
        .await
        .context("ingesting today's open interest")?;

    match outcome {
        IngestOutcome::Inserted => info!("Ingestion complete"),
        IngestOutcome::AlreadyExists => info!("Nothing to do, today's record already stored"),
    }

    Ok(())
}
