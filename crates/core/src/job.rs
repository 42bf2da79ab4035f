//! Recurring jobs and their completion records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseRecurrenceError;

/// How often a job repeats. Closed set: adding a cadence is a source
/// change, never a data value, so matches stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
}

impl FromStr for RecurrenceType {
    type Err = ParseRecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(RecurrenceType::Daily),
            "weekly" => Ok(RecurrenceType::Weekly),
            "monthly" => Ok(RecurrenceType::Monthly),
            other => Err(ParseRecurrenceError(other.to_string())),
        }
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceType::Daily => write!(f, "daily"),
            RecurrenceType::Weekly => write!(f, "weekly"),
            RecurrenceType::Monthly => write!(f, "monthly"),
        }
    }
}

/// A recurring task assigned to a single member.
///
/// `next_due_date` is moved only by manual rescheduling or by the
/// recurrence advancer after a completion; the availability validator
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub group_id: String,
    /// Member id of the single assignee.
    pub assigned_to: String,
    pub recurrence: RecurrenceType,
    pub start_date: DateTime<Utc>,
    pub next_due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One completion event for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub id: String,
    pub job_id: String,
    pub completed_at: DateTime<Utc>,
    /// Member id of whoever completed the occurrence.
    pub completed_by: String,
}
