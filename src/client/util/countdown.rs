//! Time remaining until a ticket departs.
//!
//! Tickets carry their departure as separate local date (`YYYY-MM-DD`) and time (`HH:MM`)
//! strings. The countdown is derived from the millisecond difference between that instant and
//! the current local time and refreshed on a fixed cadence by the owning component.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// Granularity of a countdown, which also decides how often it is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Cards and tables: days, hours and minutes, refreshed once a minute.
    Minutes,
    /// Ticket detail page: adds seconds, refreshed once a second.
    Seconds,
}

impl Precision {
    pub fn refresh_interval(&self) -> Duration {
        match self {
            Self::Minutes => Duration::from_secs(60),
            Self::Seconds => Duration::from_secs(1),
        }
    }

    pub fn expired_text(&self) -> &'static str {
        match self {
            Self::Minutes => "Departed",
            Self::Seconds => "Departure time has passed",
        }
    }
}

/// Whole units left until departure, each unit taken modulo its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split a positive millisecond difference into days, hours, minutes and seconds.
    pub fn from_millis(millis: i64) -> Self {
        Self {
            days: millis / MILLIS_PER_DAY,
            hours: (millis / MILLIS_PER_HOUR) % 24,
            minutes: (millis / MILLIS_PER_MINUTE) % 60,
            seconds: (millis / MILLIS_PER_SECOND) % 60,
        }
    }

    pub fn total_millis(&self) -> i64 {
        self.days * MILLIS_PER_DAY
            + self.hours * MILLIS_PER_HOUR
            + self.minutes * MILLIS_PER_MINUTE
            + self.seconds * MILLIS_PER_SECOND
    }

    pub fn format(&self, precision: Precision) -> String {
        match precision {
            Precision::Minutes => format!("{}d {}h {}m", self.days, self.hours, self.minutes),
            Precision::Seconds => format!(
                "{}d {}h {}m {}s",
                self.days, self.hours, self.minutes, self.seconds
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Remaining(Remaining),
    Expired,
}

impl CountdownState {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    pub fn text(&self, precision: Precision) -> String {
        match self {
            Self::Remaining(remaining) => remaining.format(precision),
            Self::Expired => precision.expired_text().to_string(),
        }
    }
}

/// Combine a departure date and time into a local instant.
///
/// Returns `None` when either part is absent or cannot be parsed. Times may include seconds.
pub fn departure_instant(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    let date = date.map(str::trim).filter(|d| !d.is_empty())?;
    let time = time.map(str::trim).filter(|t| !t.is_empty())?;

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;

    Some(date.and_time(time))
}

pub fn compute(departure: NaiveDateTime, now: NaiveDateTime) -> CountdownState {
    let remaining = departure.signed_duration_since(now).num_milliseconds();

    if remaining <= 0 {
        CountdownState::Expired
    } else {
        CountdownState::Remaining(Remaining::from_millis(remaining))
    }
}

/// Whether the departure has already passed, `false` when the departure is unknown.
pub fn has_departed(date: Option<&str>, time: Option<&str>, now: NaiveDateTime) -> bool {
    departure_instant(date, time)
        .map(|departure| compute(departure, now).is_expired())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use chrono::Duration as ChronoDuration;

    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        departure_instant(Some(date), Some(time)).unwrap()
    }

    #[test]
    fn missing_inputs_produce_no_departure() {
        assert_eq!(departure_instant(None, Some("10:00")), None);
        assert_eq!(departure_instant(Some("2025-01-10"), None), None);
        assert_eq!(departure_instant(Some(""), Some("10:00")), None);
        assert_eq!(departure_instant(Some("10/01/2025"), Some("10:00")), None);
    }

    #[test]
    fn accepts_times_with_seconds() {
        assert_eq!(
            departure_instant(Some("2025-01-10"), Some("10:00:30")),
            Some(at("2025-01-10", "10:00") + ChronoDuration::seconds(30))
        );
    }

    #[test]
    fn splits_difference_into_units() {
        let now = at("2025-01-10", "08:00");
        let departure = now
            + ChronoDuration::days(2)
            + ChronoDuration::hours(3)
            + ChronoDuration::minutes(4)
            + ChronoDuration::seconds(5);

        let state = compute(departure, now);

        assert_eq!(
            state,
            CountdownState::Remaining(Remaining {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5,
            })
        );
        assert_eq!(state.text(Precision::Minutes), "2d 3h 4m");
        assert_eq!(state.text(Precision::Seconds), "2d 3h 4m 5s");
    }

    #[test]
    fn units_stay_within_their_parent_range() {
        let now = at("2025-01-01", "00:00");

        for offset_secs in [1_i64, 59, 61, 3_599, 3_601, 86_399, 86_401, 1_000_000, 9_999_999] {
            let departure = now + ChronoDuration::seconds(offset_secs);
            let CountdownState::Remaining(remaining) = compute(departure, now) else {
                panic!("expected time remaining for offset {offset_secs}");
            };

            assert!(remaining.days >= 0);
            assert!((0..24).contains(&remaining.hours));
            assert!((0..60).contains(&remaining.minutes));
            assert!((0..60).contains(&remaining.seconds));

            // Minute precision drops at most one refresh tick worth of time.
            let true_millis = offset_secs * 1_000;
            let shown = Remaining {
                seconds: 0,
                ..remaining
            };
            let drift = true_millis - shown.total_millis();
            assert!((0..60_000).contains(&drift));
        }
    }

    #[test]
    fn past_and_present_departures_are_expired() {
        let departure = at("2025-01-10", "08:00");

        assert_eq!(compute(departure, departure), CountdownState::Expired);
        assert_eq!(
            compute(departure, departure + ChronoDuration::minutes(1)),
            CountdownState::Expired
        );
        assert_eq!(
            compute(departure, departure + ChronoDuration::days(30)),
            CountdownState::Expired
        );
    }

    #[test]
    fn expired_marker_depends_on_context() {
        assert_eq!(CountdownState::Expired.text(Precision::Minutes), "Departed");
        assert_eq!(
            CountdownState::Expired.text(Precision::Seconds),
            "Departure time has passed"
        );
    }

    #[test]
    fn refresh_cadence_matches_precision() {
        assert_eq!(Precision::Minutes.refresh_interval(), Duration::from_secs(60));
        assert_eq!(Precision::Seconds.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn unknown_departure_is_not_departed() {
        let now = at("2025-01-10", "08:00");

        assert!(!has_departed(None, None, now));
        assert!(has_departed(Some("2025-01-09"), Some("08:00"), now));
        assert!(!has_departed(Some("2025-01-11"), Some("08:00"), now));
    }
}
