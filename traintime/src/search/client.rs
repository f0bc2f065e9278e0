//! search.ch station completion client.

use serde::Deserialize;
use tracing::{debug, info};

use crate::USER_AGENT;
use crate::domain::{Coordinate, Station};

use super::error::SearchError;

/// Default URL of the completion endpoint.
const DEFAULT_BASE_URL: &str = "https://search.ch/timetable/api/completion.en.json";

/// Default search radius in meters.
pub const DEFAULT_RADIUS_M: u32 = 2000;

/// One entry of the completion response.
///
/// Coordinate searches can return places that are not stations; those
/// carry no `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub id: Option<String>,
    pub label: Option<String>,
    pub dist: Option<f64>,
}

impl StationDto {
    /// Convert to a domain station. Entries without an identifier are
    /// unusable for a stationboard lookup and yield `None`.
    pub fn into_station(self) -> Option<Station> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let label = self.label.unwrap_or_else(|| "?".to_string());
        Some(Station::new(id, label, self.dist))
    }
}

/// Stations found by a search, in endpoint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Usable stations, nearest first.
    pub stations: Vec<Station>,

    /// Number of completion entries dropped for lacking an identifier.
    pub skipped: usize,
}

/// Configuration for the station finder.
#[derive(Debug, Clone)]
pub struct StationFinderConfig {
    /// URL of the completion endpoint
    pub base_url: String,
    /// Search radius in meters
    pub radius_m: u32,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl StationFinderConfig {
    /// Create a config pointing at search.ch with the default radius.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            radius_m: DEFAULT_RADIUS_M,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the search radius.
    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }
}

impl Default for StationFinderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the search.ch completion API.
#[derive(Debug, Clone)]
pub struct StationFinder {
    http: reqwest::Client,
    base_url: String,
    radius_m: u32,
}

impl StationFinder {
    /// Create a new station finder.
    pub fn new(config: StationFinderConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            radius_m: config.radius_m,
        })
    }

    /// Find stations around a coordinate, nearest first.
    ///
    /// The endpoint's ordering is preserved.
    pub async fn find(&self, at: Coordinate) -> Result<SearchResult, SearchError> {
        let request = self
            .http
            .get(&self.base_url)
            .query(&search_query(at, self.radius_m))
            .build()?;

        info!(url = %request.url(), "searching stations");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        parse_stations(&body)
    }
}

/// Query parameters for a coordinate search.
fn search_query(at: Coordinate, radius_m: u32) -> [(&'static str, String); 4] {
    [
        ("latlon", at.to_string()),
        ("accuracy", radius_m.to_string()),
        ("show_ids", "1".to_string()),
        ("show_coordinates", "1".to_string()),
    ]
}

/// Decode a completion response body into stations, keeping its order.
pub fn parse_stations(body: &str) -> Result<SearchResult, SearchError> {
    let entries: Vec<StationDto> = serde_json::from_str(body).map_err(|e| SearchError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    let mut result = SearchResult::default();
    for entry in entries {
        let label = entry.label.clone();
        match entry.into_station() {
            Some(station) => result.stations.push(station),
            None => {
                debug!(label = ?label, "skipping completion entry without id");
                result.skipped += 1;
            }
        }
    }

    Ok(result)
}
