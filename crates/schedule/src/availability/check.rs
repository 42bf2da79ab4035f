use tracing::debug;

use kin_core::{DayOfWeek, Job, Member, RecurrenceType, TimeFormatError, TimeOfDay};

use super::days::affected_days;

/// Verdict of an availability check, graded by severity.
///
/// `UnavailableSomeDays` is only reachable for daily recurrence (the one
/// case where more than one day is examined); it signals a soft warning
/// where `UnavailableAllDays` signals a hard block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityCheck {
    Available,
    /// The member fails on every affected day.
    UnavailableAllDays {
        at: TimeOfDay,
        recurrence: RecurrenceType,
        days: Vec<DayOfWeek>,
    },
    /// A strict, non-empty subset of the affected days fails.
    UnavailableSomeDays {
        at: TimeOfDay,
        days: Vec<DayOfWeek>,
    },
}

impl AvailabilityCheck {
    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityCheck::Available)
    }

    /// Human-readable explanation for a negative verdict.
    pub fn reason(&self) -> Option<String> {
        match self {
            AvailabilityCheck::Available => None,
            AvailabilityCheck::UnavailableAllDays {
                at,
                recurrence,
                days,
            } => match recurrence {
                RecurrenceType::Daily => {
                    Some(format!("Member is not available at {} on any day", at))
                }
                RecurrenceType::Weekly | RecurrenceType::Monthly => Some(format!(
                    "Member is not available at {} on {}",
                    at,
                    join_days(days)
                )),
            },
            AvailabilityCheck::UnavailableSomeDays { at, days } => Some(format!(
                "Member is not available at {} on these days: {}",
                at,
                join_days(days)
            )),
        }
    }
}

fn join_days(days: &[DayOfWeek]) -> String {
    days.iter()
        .map(DayOfWeek::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decide whether `member` can do `job` at its next due timestamp.
///
/// A day fails when its window list is empty or no window contains the
/// job's due time-of-day. Pure: reads its two arguments and nothing else,
/// and never mutates the job. "Member unavailable" is a normal verdict;
/// the only error is a malformed stored window ([`TimeFormatError`]).
pub fn check_availability(
    member: &Member,
    job: &Job,
) -> Result<AvailabilityCheck, TimeFormatError> {
    let at = TimeOfDay::from_datetime(job.next_due_date);
    let days = affected_days(job.recurrence, job.next_due_date);

    let mut unavailable: Vec<DayOfWeek> = Vec::new();
    for &day in &days {
        let mut covered = false;
        for window in member.availability.windows(day) {
            if window.contains(at)? {
                covered = true;
                break;
            }
        }
        if !covered {
            unavailable.push(day);
        }
    }

    if unavailable.is_empty() {
        return Ok(AvailabilityCheck::Available);
    }

    debug!(
        job_id = %job.id,
        member_id = %member.id,
        "member unavailable on {}/{} affected days at {}",
        unavailable.len(),
        days.len(),
        at,
    );

    if unavailable.len() == days.len() {
        Ok(AvailabilityCheck::UnavailableAllDays {
            at,
            recurrence: job.recurrence,
            days: unavailable,
        })
    } else {
        Ok(AvailabilityCheck::UnavailableSomeDays {
            at,
            days: unavailable,
        })
    }
}
