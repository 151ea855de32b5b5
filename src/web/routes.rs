use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use tracing::error;

use super::templates;
use crate::db::PositionStore;
use crate::error::Result;
use crate::ingest::ingest_today;
use crate::query::{load_dashboard, Dashboard};
use crate::state::AppState;

/// Dashboard page. Updates today's record as a side effect; a failed update
/// is logged and the page is served anyway.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<&'static str> {
    if let Err(e) = state.db.ensure_schema().await {
        error!("Failed to ensure schema: {}", e);
    } else if let Err(e) = ingest_today(&state.db, state.provider.as_ref()).await {
        error!("Failed to update FII data: {}", e);
    }

    Html(templates::INDEX_HTML)
}

pub async fn api_data(State(state): State<Arc<AppState>>) -> Result<Json<Dashboard>> {
    let dashboard = load_dashboard(&state.db, state.history_limit).await?;
    Ok(Json(dashboard))
}
