use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::db::{models, PositionStore};
use crate::error::Result;

/// Display form of a stored position, as consumed by the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionView {
    pub date: String,
    pub long_contracts: i64,
    pub short_contracts: i64,
    pub net_contracts: i64,
    pub long_ratio: f64,
}

impl From<&models::Model> for PositionView {
    fn from(row: &models::Model) -> Self {
        Self {
            date: row.date.format("%Y-%m-%d").to_string(),
            long_contracts: row.long_contracts,
            short_contracts: row.short_contracts,
            net_contracts: row.net_contracts,
            long_ratio: round_to_cents(row.long_ratio),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Oldest first.
    pub history: Vec<PositionView>,
    #[serde(serialize_with = "latest_or_empty")]
    pub latest: Option<PositionView>,
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// `None` is written as `{}` so clients can always treat `latest` as an object.
fn latest_or_empty<S>(latest: &Option<PositionView>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match latest {
        Some(view) => view.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

pub async fn load_dashboard(store: &dyn PositionStore, limit: u64) -> Result<Dashboard> {
    let mut rows = store.latest(limit).await?;
    rows.reverse();

    let history: Vec<PositionView> = rows.iter().map(PositionView::from).collect();
    let latest = history.last().cloned();

    Ok(Dashboard { history, latest })
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use serde_json::json;

    use super::*;
    use crate::constants::HISTORY_LIMIT;
    use crate::db::{Db, NewPosition};
    use crate::provider::OpenInterest;

    async fn memory_db() -> Db {
        let db = Db::new("sqlite::memory:").await.unwrap();
        db.ensure_schema().await.unwrap();
        db
    }

    async fn seed(db: &Db, first: NaiveDate, days: u64) {
        // insert out of order so ordering comes from the query, not insertion
        for offset in (0..days).rev() {
            let date = first + Days::new(offset);
            let oi = OpenInterest {
                long_contracts: 1_000 + offset as i64,
                short_contracts: 1_000,
            };
            let position = NewPosition::from_open_interest(date, oi).unwrap();
            db.insert_if_absent(&position).await.unwrap();
        }
    }

    #[tokio::test]
    async fn empty_store_yields_empty_history_and_object() {
        let db = memory_db().await;

        let dashboard = load_dashboard(&db, HISTORY_LIMIT).await.unwrap();

        assert!(dashboard.history.is_empty());
        assert_eq!(dashboard.latest, None);
        assert_eq!(
            serde_json::to_value(&dashboard).unwrap(),
            json!({ "history": [], "latest": {} })
        );
    }

    #[tokio::test]
    async fn keeps_the_most_recent_thirty_in_ascending_order() {
        let db = memory_db().await;
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        seed(&db, first, 35).await;

        let dashboard = load_dashboard(&db, HISTORY_LIMIT).await.unwrap();

        assert_eq!(dashboard.history.len(), 30);
        assert_eq!(dashboard.history[0].date, "2024-01-06");
        assert_eq!(dashboard.history[29].date, "2024-02-04");
        assert!(dashboard
            .history
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date));
        assert_eq!(dashboard.latest.as_ref(), dashboard.history.last());
    }

    #[tokio::test]
    async fn short_history_is_returned_whole() {
        let db = memory_db().await;
        seed(&db, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 4).await;

        let dashboard = load_dashboard(&db, HISTORY_LIMIT).await.unwrap();

        assert_eq!(dashboard.history.len(), 4);
        assert_eq!(dashboard.latest.unwrap().date, "2024-01-04");
    }

    #[tokio::test]
    async fn view_rounds_ratio_and_formats_date() {
        let db = memory_db().await;
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        let oi = OpenInterest {
            long_contracts: 190_000,
            short_contracts: 180_000,
        };
        db.insert_if_absent(&NewPosition::from_open_interest(date, oi).unwrap())
            .await
            .unwrap();

        let dashboard = load_dashboard(&db, HISTORY_LIMIT).await.unwrap();

        assert_eq!(
            serde_json::to_value(&dashboard.latest).unwrap(),
            json!({
                "date": "2024-07-09",
                "long_contracts": 190000,
                "short_contracts": 180000,
                "net_contracts": 10000,
                "long_ratio": 51.35,
            })
        );
    }
}
