//! transport.opendata.ch stationboard client.
//!
//! This module provides an HTTP client for the Swiss public transport API,
//! which lists the upcoming departures from a station.
//!
//! Key characteristics of the stationboard:
//! - Departures come in the API's order; nothing is re-sorted locally
//! - Scheduled times are Unix timestamps, predicted times are ISO 8601
//! - A `prognosis` may override the platform (and time) in real time

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_LIMIT, StationboardClient, StationboardConfig, parse_departures};
pub use convert::{convert_journey, convert_stationboard};
pub use error::BoardError;
pub use types::{Journey, PrognosisDto, StationboardResponse, Stop};
