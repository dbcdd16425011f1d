//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
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

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of years.
    ///
    /// Note: uses 365 days per year, matching ticket validity policy.
    pub fn add_years(&self, years: i64) -> Self {
        Self(self.0 + Duration::days(years * 365))
    }

    /// Returns the start of the day (00:00:00 UTC) containing this timestamp.
    pub fn start_of_day(&self) -> Self {
        let start = self.0.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc();
        Self(start)
    }

    /// Returns the last representable instant of the day containing this
    /// timestamp.
    pub fn end_of_day(&self) -> Self {
        let end = self
            .0
            .date_naive()
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .unwrap()
            .and_utc();
        Self(end)
    }

    /// Formats as the Dutch operator-facing date, e.g. `28/02/2026 om 14:05 uur`.
    pub fn format_nl(&self) -> String {
        self.0.format("%d/%m/%Y om %H:%M uur").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
