use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Long and short open interest for one participant category on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenInterest {
    pub long_contracts: i64,
    pub short_contracts: i64,
}

/// Upstream source of daily open interest.
///
/// Data for a given date may not be published yet, so implementations report
/// that as [`crate::Error::DataUnavailable`] rather than returning zeros.
#[async_trait]
pub trait OpenInterestProvider: Send + Sync {
    async fn open_interest(&self, date: NaiveDate) -> Result<OpenInterest>;
}
