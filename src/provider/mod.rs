pub mod fixed;
pub mod http;
pub mod traits;

use std::sync::Arc;

use tracing::info;

use crate::config::ProviderConfig;
use crate::error::Result;

pub use fixed::FixedProvider;
pub use http::HttpProvider;
pub use traits::{OpenInterest, OpenInterestProvider};

/// Picks the upstream implementation for the given configuration.
pub fn from_config(config: &ProviderConfig) -> Result<Arc<dyn OpenInterestProvider>> {
    match &config.base_url {
        Some(url) => {
            info!("Using open interest provider at {}", url);
            Ok(Arc::new(HttpProvider::new(url)?))
        }
        None => {
            info!("No OI_PROVIDER_URL set, using placeholder open interest");
            Ok(Arc::new(FixedProvider::default()))
        }
    }
}
