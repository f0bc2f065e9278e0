//! Domain types for the departure board.
//!
//! These types hold validated transit data, independent of the JSON shapes
//! the two web APIs return. Coordinates enforce their ranges at
//! construction; departures carry the prognosis override rule.

mod coordinate;
mod departure;
mod station;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use departure::{Departure, Prognosis};
pub use station::{Station, nearest};
