//! Members and their weekly availability patterns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::time::{DayOfWeek, TimeWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

/// A member's opt-in signal for a specific job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreference {
    pub preferred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-day availability windows covering the whole week.
///
/// Every day is always present; an empty list means unavailable all day.
/// `#[serde(default)]` maps a day missing from stored JSON to the same
/// empty list rather than failing deserialization. Windows within a day
/// are neither sorted nor deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyAvailability {
    pub monday: Vec<TimeWindow>,
    pub tuesday: Vec<TimeWindow>,
    pub wednesday: Vec<TimeWindow>,
    pub thursday: Vec<TimeWindow>,
    pub friday: Vec<TimeWindow>,
    pub saturday: Vec<TimeWindow>,
    pub sunday: Vec<TimeWindow>,
}

impl WeeklyAvailability {
    /// The windows declared for `day`.
    pub fn windows(&self, day: DayOfWeek) -> &[TimeWindow] {
        match day {
            DayOfWeek::Monday => &self.monday,
            DayOfWeek::Tuesday => &self.tuesday,
            DayOfWeek::Wednesday => &self.wednesday,
            DayOfWeek::Thursday => &self.thursday,
            DayOfWeek::Friday => &self.friday,
            DayOfWeek::Saturday => &self.saturday,
            DayOfWeek::Sunday => &self.sunday,
        }
    }

    /// Replace the windows for `day` wholesale (how edits arrive from the
    /// availability editor).
    pub fn set_windows(&mut self, day: DayOfWeek, windows: Vec<TimeWindow>) {
        let slot = match day {
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
        };
        *slot = windows;
    }
}

/// A person who can be assigned jobs within a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub availability: WeeklyAvailability,
    #[serde(default)]
    pub job_preferences: HashMap<String, JobPreference>,
}
