use async_trait::async_trait;
use chrono::NaiveDate;

use super::traits::{OpenInterest, OpenInterestProvider};
use crate::constants::{PLACEHOLDER_LONG_CONTRACTS, PLACEHOLDER_SHORT_CONTRACTS};
use crate::error::Result;

/// Returns the same counts for every date.
#[derive(Debug, Clone, Copy)]
pub struct FixedProvider {
    open_interest: OpenInterest,
}

impl FixedProvider {
    pub fn new(long_contracts: i64, short_contracts: i64) -> Self {
        Self {
            open_interest: OpenInterest {
                long_contracts,
                short_contracts,
            },
        }
    }
}

impl Default for FixedProvider {
    fn default() -> Self {
        Self::new(PLACEHOLDER_LONG_CONTRACTS, PLACEHOLDER_SHORT_CONTRACTS)
    }
}

#[async_trait]
impl OpenInterestProvider for FixedProvider {
    async fn open_interest(&self, _date: NaiveDate) -> Result<OpenInterest> {
        Ok(self.open_interest)
    }
}
