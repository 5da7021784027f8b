/// External API clients module
use crate::config::AppConfig;
use crate::domain::DateRange;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("nasa-explorer/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// A decoded response body and the status it came with
#[derive(Debug, Clone)]
pub struct FetchedJson {
    pub status: u16,
    /// `Value::Null` when the body was not JSON
    pub body: Value,
}

/// NASA APIs client (NeoWs, APOD, Mars Rover Photos)
pub struct NasaClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
    rover: String,
    rover_timeout: Duration,
}

impl NasaClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: HttpClient::new(config.timeouts.default_budget())?,
            base_url: config.nasa_api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            rover: config.mars_rover.clone(),
            rover_timeout: config.timeouts.rover_budget(),
        })
    }

    /// Fetch Near Earth Objects feed for an inclusive date range
    pub async fn fetch_neo_feed(
        &self,
        range: &DateRange,
    ) -> Result<FetchedJson, reqwest::Error> {
        let params = [
            ("start_date", range.start().to_string()),
            ("end_date", range.end().to_string()),
        ];
        self.get_json("/neo/rest/v1/feed", &params, None).await
    }

    /// Fetch Astronomy Picture of the Day metadata
    pub async fn fetch_apod(&self, date: NaiveDate) -> Result<FetchedJson, reqwest::Error> {
        let params = [("date", date.to_string())];
        self.get_json("/planetary/apod", &params, None).await
    }

    /// Fetch the rover photo listing for an Earth date
    pub async fn fetch_rover_photos(
        &self,
        date: NaiveDate,
    ) -> Result<FetchedJson, reqwest::Error> {
        let path = format!("/mars-photos/api/v1/rovers/{}/photos", self.rover);
        let params = [("earth_date", date.to_string())];
        self.get_json(&path, &params, Some(self.rover_timeout)).await
    }

    /// Download raw bytes, failing on a non-success status
    pub async fn download(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, reqwest::Error> {
        let mut req = self.http_client.get_client().get(url);
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        debug!(url, len = bytes.len(), "downloaded image");
        Ok(bytes.to_vec())
    }

    pub fn rover_timeout(&self) -> Duration {
        self.rover_timeout
    }

    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, String)],
        timeout: Option<Duration>,
    ) -> Result<FetchedJson, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .http_client
            .get_client()
            .get(&url)
            .query(params)
            .query(&[("api_key", &self.api_key)]);

        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let raw = resp.bytes().await?;
        debug!(%url, status, len = raw.len(), "received API response");

        let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);
        Ok(FetchedJson { status, body })
    }
}
