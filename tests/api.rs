use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Days, Local, NaiveDate};
use serde_json::{json, Value};
use tower::ServiceExt;

use fii_dashboard::db::{Db, NewPosition, PositionStore};
use fii_dashboard::provider::{FixedProvider, OpenInterest, OpenInterestProvider};
use fii_dashboard::state::AppState;
use fii_dashboard::{web, Error, Result};

struct UnavailableProvider;

#[async_trait]
impl OpenInterestProvider for UnavailableProvider {
    async fn open_interest(&self, date: NaiveDate) -> Result<OpenInterest> {
        Err(Error::DataUnavailable(date))
    }
}

async fn setup(provider: Arc<dyn OpenInterestProvider>) -> (Db, Router) {
    let db = Db::new("sqlite::memory:").await.unwrap();
    db.ensure_schema().await.unwrap();
    let app = web::router(AppState::new(db.clone(), provider));
    (db, app)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn data_on_empty_store() {
    let (_db, app) = setup(Arc::new(FixedProvider::default())).await;

    let (status, body) = get_json(&app, "/api/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "history": [], "latest": {} }));
}

#[tokio::test]
async fn page_load_ingests_today_once() {
    let (db, app) = setup(Arc::new(FixedProvider::default())).await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("/api/data"));

    get(&app, "/").await;
    assert_eq!(db.count().await.unwrap(), 1);

    let (_, data) = get_json(&app, "/api/data").await;
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(
        data["latest"],
        json!({
            "date": today,
            "long_contracts": 190000,
            "short_contracts": 180000,
            "net_contracts": 10000,
            "long_ratio": 51.35,
        })
    );
    assert_eq!(data["history"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn page_renders_when_upstream_is_down() {
    let (db, app) = setup(Arc::new(UnavailableProvider)).await;

    let (status, _) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(db.count().await.unwrap(), 0);
}

#[tokio::test]
async fn data_returns_latest_thirty_ascending() {
    let (db, app) = setup(Arc::new(FixedProvider::default())).await;
    let first = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
    for offset in 0..35 {
        let oi = OpenInterest {
            long_contracts: 100,
            short_contracts: 50,
        };
        let position = NewPosition::from_open_interest(first + Days::new(offset), oi).unwrap();
        db.insert_if_absent(&position).await.unwrap();
    }

    let (status, data) = get_json(&app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);

    let dates: Vec<&str> = data["history"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["date"].as_str().unwrap())
        .collect();

    let expected: Vec<String> = (5..35)
        .map(|offset| (first + Days::new(offset)).format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(dates, expected);
    assert_eq!(data["latest"], data["history"][29]);
    assert_eq!(data["latest"]["long_ratio"], json!(66.67));
}
