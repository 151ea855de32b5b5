use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;
use url::Url;

use super::traits::{OpenInterest, OpenInterestProvider};
use crate::constants::OPEN_INTEREST_PATH;
use crate::error::{Error, Result};

/// Fetches open interest from `GET {base}/open-interest?date=YYYY-MM-DD`.
pub struct HttpProvider {
    http: HttpClient,
    base_url: Url,
}

impl HttpProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;

        // Without the trailing slash `join` would replace the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: HttpClient::new(),
            base_url,
        })
    }

    pub fn endpoint(&self, date: NaiveDate) -> Result<Url> {
        let mut url = self.base_url.join(OPEN_INTEREST_PATH)?;
        url.query_pairs_mut()
            .append_pair("date", &date.format("%Y-%m-%d").to_string());
        Ok(url)
    }
}

#[async_trait]
impl OpenInterestProvider for HttpProvider {
    async fn open_interest(&self, date: NaiveDate) -> Result<OpenInterest> {
        let url = self.endpoint(date)?;
        debug!("Fetching open interest from {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::DataUnavailable(date));
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http(format!("HTTP {}: {}", status, body)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        serde_json::from_str::<OpenInterest>(&body)
            .map_err(|e| Error::MalformedData(format!("{} in response body {:?}", e, body)))
    }
}
