//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Months, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parses an ISO-8601 / RFC 3339 string as stored by repositories.
    pub fn parse_iso8601(value: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ValidationError::invalid_format("timestamp", e.to_string()))
    }

    /// Formats as ISO-8601 with millisecond precision, e.g. `2024-01-15T10:30:00.000Z`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Adds whole calendar years.
    ///
    /// Feb 29 plus one year lands on Feb 28. Saturates at the maximum
    /// representable date.
    pub fn plus_years(&self, years: u32) -> Self {
        self.0
            .checked_add_months(Months::new(years.saturating_mul(12)))
            .map(Self)
            .unwrap_or(Self(DateTime::<Utc>::MAX_UTC))
    }

    /// Subtracts whole calendar years.
    pub fn minus_years(&self, years: u32) -> Self {
        self.0
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .map(Self)
            .unwrap_or(Self(DateTime::<Utc>::MIN_UTC))
    }

    /// Creates a new timestamp by adding a duration.
    pub fn plus(&self, duration: Duration) -> Self {
        Self(self.0 + duration)
    }

    /// Creates a new timestamp by subtracting a duration.
    pub fn minus(&self, duration: Duration) -> Self {
        Self(self.0 - duration)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn iso8601_round_trips_through_storage_format() {
        let ts = at(2024, 1, 15);
        let text = ts.to_iso8601();
        assert_eq!(text, "2024-01-15T12:00:00.000Z");
        assert_eq!(Timestamp::parse_iso8601(&text).unwrap(), ts);
    }

    #[test]
    fn parse_rejects_non_iso_text() {
        assert!(Timestamp::parse_iso8601("yesterday").is_err());
    }

    #[test]
    fn plus_years_is_calendar_aware() {
        assert_eq!(at(2023, 3, 1).plus_years(1), at(2024, 3, 1));
        assert_eq!(at(2024, 2, 29).plus_years(1), at(2025, 2, 28));
    }

    #[test]
    fn minus_years_inverts_plus_years_on_ordinary_dates() {
        assert_eq!(at(2024, 6, 10).minus_years(1), at(2023, 6, 10));
    }

    #[test]
    fn ordering_helpers_agree() {
        let earlier = at(2024, 1, 1);
        let later = earlier.plus(Duration::milliseconds(1));
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert_eq!(later.duration_since(&earlier), Duration::milliseconds(1));
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let ts = at(2024, 1, 15);
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }
}
