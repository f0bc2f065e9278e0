use clap::Parser;

use crate::board::DEFAULT_LIMIT;
use crate::domain::{Coordinate, InvalidCoordinate};
use crate::search::DEFAULT_RADIUS_M;

/// Show the next departures from the public transport stop nearest to a
/// coordinate.
/// Run without a coordinate to use EPFL Valais/Sion.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Latitude in decimal degrees
    #[arg(value_name = "LAT", requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(value_name = "LON")]
    pub lon: Option<f64>,

    /// Search radius around the coordinate, in meters
    #[arg(long, short = 'r', value_name = "METERS", default_value_t = DEFAULT_RADIUS_M)]
    pub radius: u32,

    /// Number of departures to show
    #[arg(
        long,
        short = 'n',
        value_name = "NUMBER",
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    pub limit: u8,
}

impl Args {
    /// The coordinate given on the command line, or `None` when absent.
    pub fn coordinate(&self) -> Result<Option<Coordinate>, InvalidCoordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }
}
