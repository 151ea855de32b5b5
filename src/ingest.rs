//! Daily ingestion: fetch today's open interest once and store it.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::db::{InsertOutcome, NewPosition, PositionStore};
use crate::error::{Error, Result};
use crate::provider::{OpenInterest, OpenInterestProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Inserted,
    AlreadyExists,
}

impl From<InsertOutcome> for IngestOutcome {
    fn from(outcome: InsertOutcome) -> Self {
        match outcome {
            InsertOutcome::Inserted => IngestOutcome::Inserted,
            InsertOutcome::AlreadyExists => IngestOutcome::AlreadyExists,
        }
    }
}

/// Percentage of total open interest held long. Zero total yields 0.
pub fn long_ratio(long_contracts: i64, total_contracts: i64) -> f64 {
    if total_contracts == 0 {
        return 0.0;
    }
    long_contracts as f64 / total_contracts as f64 * 100.0
}

impl NewPosition {
    pub fn from_open_interest(date: NaiveDate, oi: OpenInterest) -> Result<Self> {
        if oi.long_contracts < 0 || oi.short_contracts < 0 {
            return Err(Error::MalformedData(format!(
                "negative open interest for {}: long={} short={}",
                date, oi.long_contracts, oi.short_contracts
            )));
        }

        let total = oi
            .long_contracts
            .checked_add(oi.short_contracts)
            .ok_or_else(|| {
                Error::MalformedData(format!(
                    "open interest total overflows for {}: long={} short={}",
                    date, oi.long_contracts, oi.short_contracts
                ))
            })?;

        // both sides are non-negative, so the difference cannot overflow
        Ok(Self {
            date,
            long_contracts: oi.long_contracts,
            short_contracts: oi.short_contracts,
            net_contracts: oi.long_contracts - oi.short_contracts,
            long_ratio: long_ratio(oi.long_contracts, total),
        })
    }
}

pub async fn ingest_for_date(
    store: &dyn PositionStore,
    provider: &dyn OpenInterestProvider,
    date: NaiveDate,
) -> Result<IngestOutcome> {
    if store.exists_for_date(date).await? {
        info!("Data for {} already exists.", date);
        return Ok(IngestOutcome::AlreadyExists);
    }

    let oi = provider.open_interest(date).await?;
    let position = NewPosition::from_open_interest(date, oi)?;

    let outcome = store.insert_if_absent(&position).await?;
    match outcome {
        InsertOutcome::Inserted => info!(
            "Successfully added FII data for {} (net {}, long ratio {:.2}%)",
            date, position.net_contracts, position.long_ratio
        ),
        InsertOutcome::AlreadyExists => {
            info!("Data for {} was added concurrently, skipping.", date)
        }
    }

    Ok(outcome.into())
}

/// Ingests for the local calendar date.
pub async fn ingest_today(
    store: &dyn PositionStore,
    provider: &dyn OpenInterestProvider,
) -> Result<IngestOutcome> {
    let today = Local::now().date_naive();
    ingest_for_date(store, provider, today).await
}
