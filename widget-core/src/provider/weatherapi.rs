use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::DEFAULT_BASE_URL,
    error::FetchError,
    model::{CELSIUS, WeatherSnapshot},
};

use super::WeatherProvider;

#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("base_url", &self.base_url)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn fetch_current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/current.json", self.base_url);
        tracing::debug!(%url, location, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = res.status();
        if !status.is_success() {
            // The body only feeds the log line; a truncated one is still a failed lookup.
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::CityNotFound { status, body: truncate_body(&body) });
        }

        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Parse(format!("failed to read response body: {e}")))?;

        parse_current(&body)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_current(location).await
    }
}

/// Map a `current.json` success body to a snapshot.
pub fn parse_current(body: &str) -> Result<WeatherSnapshot, FetchError> {
    let parsed: WaResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(parsed.into())
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: f64,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherSnapshot {
    fn from(res: WaResponse) -> Self {
        WeatherSnapshot {
            temperature: res.current.temp_c,
            humidity: res.current.humidity,
            wind: res.current.wind_kph,
            description: res.current.condition.text,
            location: res.location.name,
            unit: CELSIUS.to_string(),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
