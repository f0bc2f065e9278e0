//! Conversion from stationboard DTOs to domain types.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

use crate::domain::{Departure, Prognosis};

use super::types::{Journey, PrognosisDto, StationboardResponse};

/// Convert a stationboard response to departures, keeping the API order.
///
/// A missing `stationboard` array is an empty board.
pub fn convert_stationboard(response: StationboardResponse) -> Vec<Departure> {
    response
        .stationboard
        .unwrap_or_default()
        .into_iter()
        .map(convert_journey)
        .collect()
}

/// Convert a single journey. Missing fields fall back to empty values.
pub fn convert_journey(journey: Journey) -> Departure {
    let stop = journey.stop;

    let scheduled = stop
        .as_ref()
        .and_then(|s| s.departure_timestamp)
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0));

    let delay_mins = stop.as_ref().and_then(|s| s.delay).unwrap_or(0);
    let platform = stop.as_ref().and_then(|s| s.platform.clone());

    let prognosis = stop
        .and_then(|s| s.prognosis)
        .map(convert_prognosis)
        .unwrap_or_default();

    Departure {
        destination: journey.to.unwrap_or_else(|| "?".to_string()),
        category: journey.category.unwrap_or_default(),
        number: journey.number.unwrap_or_default(),
        scheduled,
        delay_mins,
        platform,
        prognosis,
    }
}

fn convert_prognosis(dto: PrognosisDto) -> Prognosis {
    let departure = dto.departure.as_deref().and_then(|s| {
        let parsed = parse_api_datetime(s);
        if parsed.is_none() {
            debug!(value = s, "unparseable prognosis departure");
        }
        parsed
    });

    Prognosis {
        platform: dto.platform,
        departure,
    }
}

/// Parse an API datetime. The API writes offsets without a colon
/// ("+0100"); RFC 3339 is accepted as well.
fn parse_api_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::Stop;

    fn journey(stop: Option<Stop>) -> Journey {
        Journey {
            to: Some("Brig".to_string()),
            category: Some("IR".to_string()),
            number: Some("90".to_string()),
            stop,
        }
    }

    fn stop() -> Stop {
        Stop {
            departure_timestamp: Some(1_710_495_900),
            delay: Some(2),
            platform: Some("3".to_string()),
            prognosis: None,
        }
    }

    #[test]
    fn convert_full_journey() {
        let dep = convert_journey(journey(Some(Stop {
            prognosis: Some(PrognosisDto {
                platform: Some("4".to_string()),
                departure: Some("2024-03-15T10:47:00+0100".to_string()),
            }),
            ..stop()
        })));

        assert_eq!(dep.destination, "Brig");
        assert_eq!(dep.line(), "IR90");
        assert_eq!(dep.scheduled.unwrap().timestamp(), 1_710_495_900);
        assert_eq!(dep.delay_mins, 2);
        assert_eq!(dep.platform.as_deref(), Some("3"));
        assert_eq!(dep.prognosis.platform.as_deref(), Some("4"));

        let predicted = dep.prognosis.departure.unwrap();
        assert_eq!(predicted.to_rfc3339(), "2024-03-15T10:47:00+01:00");
    }

    #[test]
    fn missing_delay_defaults_to_zero() {
        let dep = convert_journey(journey(Some(Stop {
            delay: None,
            ..stop()
        })));
        assert_eq!(dep.delay_mins, 0);
    }

    #[test]
    fn missing_stop_leaves_timing_unknown() {
        let dep = convert_journey(journey(None));
        assert!(dep.scheduled.is_none());
        assert_eq!(dep.delay_mins, 0);
        assert!(dep.platform.is_none());
        assert_eq!(dep.prognosis, Prognosis::default());
    }

    #[test]
    fn missing_labels_fall_back() {
        let dep = convert_journey(Journey {
            to: None,
            category: None,
            number: None,
            stop: None,
        });
        assert_eq!(dep.destination, "?");
        assert_eq!(dep.line(), "");
    }

    #[test]
    fn unparseable_prognosis_departure_is_dropped() {
        let prognosis = convert_prognosis(PrognosisDto {
            platform: Some("4".to_string()),
            departure: Some("soon".to_string()),
        });
        assert_eq!(prognosis.platform.as_deref(), Some("4"));
        assert!(prognosis.departure.is_none());
    }

    #[test]
    fn parse_api_datetime_formats() {
        assert!(parse_api_datetime("2024-03-15T10:47:00+0100").is_some());
        assert!(parse_api_datetime("2024-03-15T10:47:00+01:00").is_some());
        assert!(parse_api_datetime("10:47").is_none());
    }

    #[test]
    fn convert_keeps_order() {
        let response = StationboardResponse {
            stationboard: Some(vec![
                Journey {
                    to: Some("Brig".to_string()),
                    ..journey(None)
                },
                Journey {
                    to: Some("Genève-Aéroport".to_string()),
                    ..journey(None)
                },
            ]),
        };

        let departures = convert_stationboard(response);
        assert_eq!(departures.len(), 2);
        assert_eq!(departures[0].destination, "Brig");
        assert_eq!(departures[1].destination, "Genève-Aéroport");
    }

    #[test]
    fn absent_board_is_empty() {
        let departures = convert_stationboard(StationboardResponse { stationboard: None });
        assert!(departures.is_empty());
    }
}
