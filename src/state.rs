use std::sync::Arc;

use crate::constants::HISTORY_LIMIT;
use crate::db::Db;
use crate::provider::OpenInterestProvider;

/// Everything a request handler needs, built once at startup.
pub struct AppState {
    pub db: Db,
    pub provider: Arc<dyn OpenInterestProvider>,
    pub history_limit: u64,
}

impl AppState {
    pub fn new(db: Db, provider: Arc<dyn OpenInterestProvider>) -> Arc<Self> {
        Arc::new(Self {
            db,
            provider,
            history_limit: HISTORY_LIMIT,
        })
    }
}
