//! Wall-clock time values: time-of-day, availability windows, days of week.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TimeFormatError;

/// A wall-clock time of day, compared as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build from hour/minute components, rejecting out-of-range values.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeFormatError> {
        if hour > 23 || minute > 59 {
            return Err(TimeFormatError(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// The time-of-day component of a timestamp.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
        }
    }

    /// Canonical comparison form: total minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeFormatError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hour: u8 = h.parse().map_err(|_| err())?;
        let minute: u8 = m.parse().map_err(|_| err())?;
        Self::new(hour, minute).map_err(|_| err())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A time-of-day interval, inclusive on both ends.
///
/// Bounds are kept as the persisted `HH:mm` strings and parsed at check
/// time, so a malformed stored window surfaces as [`TimeFormatError`] from
/// the availability check that touches it rather than silently coercing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether `t` falls inside this window (`start <= t <= end`).
    ///
    /// `start > end` is legal; such a window matches nothing. `start == end`
    /// matches exactly that instant.
    pub fn contains(&self, t: TimeOfDay) -> Result<bool, TimeFormatError> {
        let start: TimeOfDay = self.start.parse()?;
        let end: TimeOfDay = self.end.parse()?;
        Ok(start.minutes() <= t.minutes() && t.minutes() <= end.minutes())
    }
}

/// A calendar day label. Ordering between days never matters, only equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All seven days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(DayOfWeek::Monday),
            "tuesday" => Ok(DayOfWeek::Tuesday),
            "wednesday" => Ok(DayOfWeek::Wednesday),
            "thursday" => Ok(DayOfWeek::Thursday),
            "friday" => Ok(DayOfWeek::Friday),
            "saturday" => Ok(DayOfWeek::Saturday),
            "sunday" => Ok(DayOfWeek::Sunday),
            other => Err(format!("unknown day of week '{}'", other)),
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(wd: Weekday) -> Self {
        match wd {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}
