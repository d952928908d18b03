//! Business dates and the clock that supplies them
//!
//! Rider attachment dates are business dates in the office's timezone, not
//! UTC instants. The [`Clock`] trait lets services ask for "today" without
//! reading the system time directly, so tests can pin the date.

use chrono::{DateTime, Months, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Date out of range: {date} + {months} months")]
    OutOfRange { date: NaiveDate, months: u32 },
}

/// Timezone wrapper for the office jurisdiction
///
/// Wraps `chrono_tz::Tz` with string (IANA name) serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the calendar date of `instant` in this timezone
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of the current business date
pub trait Clock: Send + Sync {
    /// Returns today's date in the business timezone
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, read in a fixed timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.local_date(Utc::now())
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Adds calendar months to a date, clamping to the last day of the month
///
/// `2024-01-31 + 1 month` is `2024-02-29`.
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, TemporalError> {
    date.checked_add_months(Months::new(months))
        .ok_or(TemporalError::OutOfRange { date, months })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2024, 3, 15));
        assert_eq!(clock.today(), date(2024, 3, 15));
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        let tz: Timezone = "Asia/Kolkata".parse().unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap();

        assert_eq!(tz.local_date(instant), date(2024, 3, 16));
        assert_eq!(Timezone::default().local_date(instant), date(2024, 3, 15));
    }

    #[test]
    fn test_invalid_timezone() {
        let result = "Mars/Olympus".parse::<Timezone>();
        assert!(matches!(result, Err(TemporalError::InvalidTimezone(_))));
    }

    #[test]
    fn test_timezone_serde() {
        let tz: Timezone = "Europe/London".parse().unwrap();
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Europe/London\"");

        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 1, 15), 12).unwrap(), date(2025, 1, 15));
        assert_eq!(add_months(date(2024, 1, 15), 0).unwrap(), date(2024, 1, 15));
    }
}
