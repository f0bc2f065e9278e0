//! Station search by coordinate.
//!
//! Queries the search.ch timetable completion API, which returns the
//! stations around a point ordered by proximity.

mod client;
mod error;

pub use client::{
    DEFAULT_RADIUS_M, SearchResult, StationDto, StationFinder, StationFinderConfig, parse_stations,
};
pub use error::SearchError;
