//! Stationboard API response DTOs.
//!
//! These types map directly to the transport.opendata.ch JSON responses.
//! Every field is an `Option`: the field selector trims the payload, and the
//! API sends `null` for anything it does not know.

use serde::Deserialize;

/// Response from `/v1/stationboard`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationboardResponse {
    /// Departures in the order the API lists them.
    pub stationboard: Option<Vec<Journey>>,
}

/// One departing journey on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct Journey {
    /// Destination label.
    pub to: Option<String>,

    /// Transport category code (e.g. "IR", "S", "B").
    pub category: Option<String>,

    /// Line number within the category.
    pub number: Option<String>,

    /// Timing and platform at the board station.
    pub stop: Option<Stop>,
}

/// The journey's stop at the board station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Scheduled departure as Unix seconds.
    pub departure_timestamp: Option<i64>,

    /// Delay in minutes.
    pub delay: Option<i64>,

    /// Scheduled platform.
    pub platform: Option<String>,

    /// Real-time prediction.
    pub prognosis: Option<PrognosisDto>,
}

/// Real-time prediction for a stop.
#[derive(Debug, Clone, Deserialize)]
pub struct PrognosisDto {
    /// Predicted platform.
    pub platform: Option<String>,

    /// Predicted departure, e.g. "2024-03-15T10:47:00+0100".
    pub departure: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_stationboard() {
        let json = r#"{
            "stationboard": [
                {
                    "stop": {
                        "departureTimestamp": 1710495900,
                        "delay": 2,
                        "platform": "3",
                        "prognosis": {"platform": "4", "departure": "2024-03-15T10:47:00+0100"}
                    },
                    "category": "IR",
                    "number": "90",
                    "to": "Brig"
                },
                {
                    "stop": {
                        "departureTimestamp": 1710496200,
                        "delay": null,
                        "platform": null,
                        "prognosis": null
                    },
                    "category": "B",
                    "number": "1",
                    "to": "Sion, Vissigen"
                }
            ]
        }"#;

        let response: StationboardResponse = serde_json::from_str(json).unwrap();
        let journeys = response.stationboard.unwrap();
        assert_eq!(journeys.len(), 2);

        let ir = &journeys[0];
        assert_eq!(ir.to.as_deref(), Some("Brig"));
        assert_eq!(ir.category.as_deref(), Some("IR"));
        assert_eq!(ir.number.as_deref(), Some("90"));

        let stop = ir.stop.as_ref().unwrap();
        assert_eq!(stop.departure_timestamp, Some(1710495900));
        assert_eq!(stop.delay, Some(2));
        assert_eq!(stop.platform.as_deref(), Some("3"));

        let prognosis = stop.prognosis.as_ref().unwrap();
        assert_eq!(prognosis.platform.as_deref(), Some("4"));
        assert_eq!(
            prognosis.departure.as_deref(),
            Some("2024-03-15T10:47:00+0100")
        );

        let bus_stop = journeys[1].stop.as_ref().unwrap();
        assert!(bus_stop.delay.is_none());
        assert!(bus_stop.platform.is_none());
        assert!(bus_stop.prognosis.is_none());
    }

    #[test]
    fn deserialize_without_stationboard() {
        let response: StationboardResponse = serde_json::from_str("{}").unwrap();
        assert!(response.stationboard.is_none());

        let response: StationboardResponse =
            serde_json::from_str(r#"{"stationboard": null}"#).unwrap();
        assert!(response.stationboard.is_none());
    }

    #[test]
    fn deserialize_journey_without_stop() {
        let journey: Journey = serde_json::from_str(r#"{"to": "Brig"}"#).unwrap();
        assert!(journey.stop.is_none());
        assert!(journey.category.is_none());
    }
}
