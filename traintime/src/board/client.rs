//! transport.opendata.ch stationboard HTTP client.
//!
//! Fetches the next departures from a station, asking the API for only the
//! fields the board needs.

use tracing::info;

use crate::USER_AGENT;
use crate::domain::Departure;

use super::convert::convert_stationboard;
use super::error::BoardError;
use super::types::StationboardResponse;

/// Default URL of the stationboard endpoint.
const DEFAULT_BASE_URL: &str = "https://transport.opendata.ch/v1/stationboard";

/// Default number of departures to request.
pub const DEFAULT_LIMIT: u8 = 8;

/// Nested fields requested through the repeated `fields[]` selector.
const FIELDS: [&str; 8] = [
    "stationboard/to",
    "stationboard/category",
    "stationboard/number",
    "stationboard/stop/departureTimestamp",
    "stationboard/stop/delay",
    "stationboard/stop/platform",
    "stationboard/stop/prognosis/platform",
    "stationboard/stop/prognosis/departure",
];

/// Configuration for the stationboard client.
#[derive(Debug, Clone)]
pub struct StationboardConfig {
    /// URL of the stationboard endpoint
    pub base_url: String,
    /// Number of departures to request
    pub limit: u8,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl StationboardConfig {
    /// Create a config pointing at transport.opendata.ch.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the number of departures to request.
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for StationboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Stationboard API client.
#[derive(Debug, Clone)]
pub struct StationboardClient {
    http: reqwest::Client,
    base_url: String,
    limit: u8,
}

impl StationboardClient {
    /// Create a new stationboard client with the given configuration.
    pub fn new(config: StationboardConfig) -> Result<Self, BoardError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            limit: config.limit,
        })
    }

    /// Get the next departures from a station, in the API's order.
    ///
    /// # Arguments
    ///
    /// * `station_id` - Station identifier from the station search
    pub async fn departures(&self, station_id: &str) -> Result<Vec<Departure>, BoardError> {
        let request = self.request(station_id)?;

        info!(url = %request.url(), "fetching stationboard");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BoardError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        parse_departures(&body)
    }

    fn request(&self, station_id: &str) -> Result<reqwest::Request, BoardError> {
        let mut query = vec![
            ("id", station_id.to_string()),
            ("limit", self.limit.to_string()),
        ];
        query.extend(FIELDS.iter().map(|f| ("fields[]", f.to_string())));

        Ok(self.http.get(&self.base_url).query(&query).build()?)
    }
}

/// Decode a stationboard response body into departures.
pub fn parse_departures(body: &str) -> Result<Vec<Departure>, BoardError> {
    let response: StationboardResponse =
        serde_json::from_str(body).map_err(|e| BoardError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

    Ok(convert_stationboard(response))
}
