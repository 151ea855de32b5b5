use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::models;
use crate::error::Result;

/// A position ready to be stored, with the derived columns already computed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPosition {
    pub date: NaiveDate,
    pub long_contracts: i64,
    pub short_contracts: i64,
    pub net_contracts: i64,
    pub long_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

/// Keyed-by-date storage of daily positions.
#[async_trait]
pub trait PositionStore: Send + Sync {
    async fn ensure_schema(&self) -> Result<()>;

    async fn exists_for_date(&self, date: NaiveDate) -> Result<bool>;

    /// Inserts the record unless one already exists for its date. Never
    /// fails because of a duplicate date.
    async fn insert_if_absent(&self, position: &NewPosition) -> Result<InsertOutcome>;

    /// Most recent records, newest first.
    async fn latest(&self, limit: u64) -> Result<Vec<models::Model>>;

    async fn count(&self) -> Result<u64>;
}
