//! Station types.

/// A station candidate returned by a proximity search.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Identifier accepted by the stationboard endpoint (e.g. "8501506").
    pub id: String,

    /// Display name, e.g. "Sion".
    pub label: String,

    /// Distance from the searched coordinate, in meters.
    pub distance_m: Option<f64>,
}

impl Station {
    pub fn new(id: impl Into<String>, label: impl Into<String>, distance_m: Option<f64>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            distance_m,
        }
    }

    /// Distance rendered in whole meters, or `?` when unknown.
    pub fn distance_label(&self) -> String {
        match self.distance_m {
            Some(d) => format!("{d:.0}"),
            None => "?".to_string(),
        }
    }
}

/// Pick the nearest station from a search result.
///
/// The completion endpoint already orders results by proximity, so this is
/// the first entry. Returns `None` for an empty list.
pub fn nearest(stations: &[Station]) -> Option<&Station> {
    stations.first()
}
