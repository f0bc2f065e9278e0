//! The nearest-station departure flow.
//!
//! Search stations around a coordinate, pick the nearest, print its board.
//! The two lookups sit behind [`Timetable`] so the flow can run against
//! in-memory data in tests.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::board::{BoardError, StationboardClient, StationboardConfig};
use crate::domain::{Coordinate, Departure, InvalidCoordinate, Station, nearest};
use crate::render;
use crate::search::{SearchError, SearchResult, StationFinder, StationFinderConfig};

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The search returned no usable station
    #[error("no stations found")]
    NoStations,

    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),

    #[error("station search failed: {0}")]
    Search(#[from] SearchError),

    #[error("stationboard request failed: {0}")]
    Board(#[from] BoardError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Source of stations and departures.
#[allow(async_fn_in_trait)]
pub trait Timetable {
    /// Stations around `at`, nearest first.
    async fn find_stations(&self, at: Coordinate) -> Result<SearchResult, SearchError>;

    /// Upcoming departures from a station, in board order.
    async fn departures(&self, station_id: &str) -> Result<Vec<Departure>, BoardError>;
}

/// [`Timetable`] backed by search.ch and transport.opendata.ch.
#[derive(Debug, Clone)]
pub struct HttpTimetable {
    finder: StationFinder,
    board: StationboardClient,
}

impl HttpTimetable {
    pub fn new(
        search_config: StationFinderConfig,
        board_config: StationboardConfig,
    ) -> Result<Self, AppError> {
        Ok(Self {
            finder: StationFinder::new(search_config)?,
            board: StationboardClient::new(board_config)?,
        })
    }
}

impl Timetable for HttpTimetable {
    async fn find_stations(&self, at: Coordinate) -> Result<SearchResult, SearchError> {
        self.finder.find(at).await
    }

    async fn departures(&self, station_id: &str) -> Result<Vec<Departure>, BoardError> {
        self.board.departures(station_id).await
    }
}

/// Run the flow once, writing everything user-facing to `out`.
///
/// `now` is read after the board has been fetched, so minute counts are
/// relative to the moment the departures are printed. Returns the station
/// whose board was shown.
pub async fn run<T, W, F>(
    timetable: &T,
    at: Coordinate,
    out: &mut W,
    now: F,
) -> Result<Station, AppError>
where
    T: Timetable,
    W: Write,
    F: FnOnce() -> DateTime<Utc>,
{
    render::write_search_header(out, at)?;

    let found = timetable.find_stations(at).await?;
    render::write_station_list(out, &found)?;

    let Some(best) = nearest(&found.stations) else {
        warn!(%at, "search returned no stations");
        writeln!(out, "No stations found!")?;
        return Err(AppError::NoStations);
    };

    debug!(id = %best.id, label = %best.label, "selected nearest station");
    render::write_nearest(out, best)?;

    let departures = timetable.departures(&best.id).await?;
    render::write_board(out, &best.label, &departures, now())?;

    Ok(best.clone())
}
