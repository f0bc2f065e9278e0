//! Nearest-station departure board.
//!
//! Finds the public transport stops around a coordinate with the search.ch
//! completion API, then prints the next departures from the closest one
//! using the transport.opendata.ch stationboard.

pub mod app;
pub mod board;
pub mod cli;
pub mod domain;
pub mod logging;
pub mod render;
pub mod search;

#[cfg(test)]
mod test_server;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "traintime/0.1";
