//! Departure types.
//!
//! A departure carries both the scheduled values and the optional real-time
//! prognosis. The prognosis overrides the scheduled platform only when both
//! are known and they differ; see [`Departure::effective_platform`].

use chrono::{DateTime, FixedOffset, Utc};

/// Real-time prediction attached to a departure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prognosis {
    /// Predicted platform, if the source reports one.
    pub platform: Option<String>,

    /// Predicted departure time, if the source reports one.
    pub departure: Option<DateTime<FixedOffset>>,
}

/// A single departure from a stationboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    /// Destination label, e.g. "Brig".
    pub destination: String,

    /// Transport category code, e.g. "IR", "S", "B".
    pub category: String,

    /// Line number within the category, e.g. "90".
    pub number: String,

    /// Scheduled departure time.
    pub scheduled: Option<DateTime<Utc>>,

    /// Delay in minutes as reported by the source (0 when unreported).
    pub delay_mins: i64,

    /// Scheduled platform.
    pub platform: Option<String>,

    /// Real-time prognosis.
    pub prognosis: Prognosis,
}

impl Departure {
    /// Whole minutes until the scheduled departure, rounded towards negative
    /// infinity. `None` when there is no scheduled time.
    pub fn minutes_until(&self, now: DateTime<Utc>) -> Option<i64> {
        let scheduled = self.scheduled?;
        let millis = (scheduled - now).num_milliseconds();
        Some(millis.div_euclid(60_000))
    }

    /// Whether the prognosis moves this departure to another platform.
    ///
    /// Only true when both the scheduled and the predicted platform are
    /// known, non-empty and different.
    pub fn platform_changed(&self) -> bool {
        match (non_empty(&self.platform), non_empty(&self.prognosis.platform)) {
            (Some(scheduled), Some(predicted)) => scheduled != predicted,
            _ => false,
        }
    }

    /// The platform a traveller should go to.
    pub fn effective_platform(&self) -> Option<&str> {
        if self.platform_changed() {
            self.prognosis.platform.as_deref()
        } else {
            self.platform.as_deref()
        }
    }

    /// Category and number joined, e.g. "IR90".
    pub fn line(&self) -> String {
        format!("{}{}", self.category, self.number)
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
