use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::model::{LocationCandidate, LocationWeather};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://www.metaweather.com";

/// MetaWeather serves small JSON documents; anything slower than this is
/// treated as a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the MetaWeather REST API.
///
/// The API is keyless. Lookups are a two-step chain: a free-form location
/// search resolves a name to a WOEID, then the weather document is fetched
/// by that id.
#[derive(Debug, Clone)]
pub struct MetaWeatherClient {
    http: Client,
    base_url: String,
}

impl Default for MetaWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaWeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, e.g. a local stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// `GET /api/location/search/?query={query}`
    pub async fn search_location(&self, query: &str) -> Result<Vec<LocationCandidate>> {
        let url = format!("{}/api/location/search/", self.base_url);
        debug!("searching locations: query={query}");

        let res = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!("location search responded with status {status}");

        if !status.is_success() {
            return Err(Error::Status {
                endpoint: "location search",
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            endpoint: "location search",
            source,
        })
    }

    /// `GET /api/location/{woeid}/`
    pub async fn location(&self, woeid: i64) -> Result<LocationWeather> {
        let url = format!("{}/api/location/{woeid}/", self.base_url);
        debug!("fetching weather: woeid={woeid}");

        let res = self.http.get(&url).timeout(REQUEST_TIMEOUT).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!("location fetch responded with status {status}");

        if !status.is_success() {
            return Err(Error::Status {
                endpoint: "location",
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            endpoint: "location",
            source,
        })
    }

    /// Search for `query` and fetch the weather document of the first match.
    ///
    /// No retries; the first failing step aborts the chain.
    pub async fn location_by_query(&self, query: &str) -> Result<LocationWeather> {
        let candidates = self.search_location(query).await?;

        let first = candidates.first().ok_or_else(|| Error::LocationNotFound {
            query: query.to_string(),
        })?;

        let weather = self.location(first.woeid).await?;

        if weather.consolidated_weather.is_empty() {
            return Err(Error::MissingWeatherData {
                title: weather.title,
            });
        }

        Ok(weather)
    }
}

#[async_trait]
impl WeatherProvider for MetaWeatherClient {
    async fn current_weather(&self, query: &str) -> anyhow::Result<LocationWeather> {
        Ok(self.location_by_query(query).await?)
    }
}

/// Keep error messages readable when the service answers with an HTML page.
fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    match body.char_indices().nth(MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
