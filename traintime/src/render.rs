//! Console rendering of station lists and departure boards.

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::domain::{Coordinate, Departure, Station};
use crate::search::SearchResult;

/// Marker appended to a platform that the prognosis has changed.
pub const PLATFORM_CHANGE_MARKER: char = '!';

// ============================================================================
// View Models
// ============================================================================

/// One line of the departure board, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub minutes: String,
    pub delay: String,
    pub platform: String,
    pub line: String,
    pub destination: String,
}

impl BoardRow {
    /// Build the row for a departure as seen at `now`.
    pub fn new(departure: &Departure, now: DateTime<Utc>) -> Self {
        Self {
            minutes: minutes_label(departure.minutes_until(now)),
            delay: delay_label(departure.delay_mins),
            platform: platform_label(departure),
            line: departure.line(),
            destination: departure.destination.clone(),
        }
    }
}

impl fmt::Display for BoardRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {:>5}  {:>5}  {:>4}  {:>4}  {}",
            self.minutes, self.delay, self.platform, self.line, self.destination
        )
    }
}

/// Minutes until departure as `N'`, or `?` when unknown.
pub fn minutes_label(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) => format!("{m}'"),
        None => "?".to_string(),
    }
}

/// Delay as `+N`; empty when the departure is not late.
pub fn delay_label(delay_mins: i64) -> String {
    if delay_mins > 0 {
        format!("+{delay_mins}")
    } else {
        String::new()
    }
}

/// Platform to display, marked when the prognosis moved it.
pub fn platform_label(departure: &Departure) -> String {
    let platform = departure.effective_platform().unwrap_or_default();
    if departure.platform_changed() {
        format!("{platform}{PLATFORM_CHANGE_MARKER}")
    } else {
        platform.to_string()
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Notice printed when no coordinate was given on the command line.
pub fn write_usage(out: &mut impl Write, program: &str) -> io::Result<()> {
    let fallback = Coordinate::DEFAULT;
    writeln!(out, "Usage: {program} <lat> <lon>")?;
    writeln!(
        out,
        "Using default: {} @ {}, {}",
        Coordinate::DEFAULT_NAME,
        fallback.lat(),
        fallback.lon()
    )
}

pub fn write_search_header(out: &mut impl Write, at: Coordinate) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Station search ---")?;
    writeln!(out, "Around {}, {}", at.lat(), at.lon())
}

/// List every station the search returned, in order, and how many
/// entries were dropped for lacking an id.
pub fn write_station_list(out: &mut impl Write, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "Found {} stations:", result.stations.len())?;
    for station in &result.stations {
        writeln!(
            out,
            "  {:<30}  id={:<10}  dist={}m",
            station.label,
            station.id,
            station.distance_label()
        )?;
    }
    if result.skipped > 0 {
        writeln!(out, "  ({} entries without a station id skipped)", result.skipped)?;
    }
    Ok(())
}

pub fn write_nearest(out: &mut impl Write, station: &Station) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Using closest: {} ({}m away)",
        station.label,
        station.distance_label()
    )
}

/// Print the board for a station: a header, then one row per departure in
/// the given order.
pub fn write_board(
    out: &mut impl Write,
    station_name: &str,
    departures: &[Departure],
    now: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Stationboard: {station_name} ---")?;

    if departures.is_empty() {
        return writeln!(out, "  No departures found.");
    }

    writeln!(
        out,
        "  {:>5}  {:>5}  {:>4}  {:>4}  DESTINATION",
        "MIN", "DELAY", "PL", "CAT"
    )?;
    writeln!(
        out,
        "  {:>5}  {:>5}  {:>4}  {:>4}  -----------",
        "---", "-----", "--", "---"
    )?;

    for departure in departures {
        writeln!(out, "{}", BoardRow::new(departure, now))?;
    }

    Ok(())
}
