use chrono::{DateTime, Datelike, Utc};

use kin_core::{DayOfWeek, RecurrenceType};

/// The calendar days a validation check must examine for one occurrence.
///
/// - `Daily`: the occurrence's time-of-day recurs every day, so all seven
///   days' availability must permit it.
/// - `Weekly` and `Monthly`: only the weekday of `reference` matters.
///   Monthly is availability-equivalent to weekly because the day-of-month
///   never changes which weekday windows apply.
///
/// The match is exhaustive over the closed recurrence enum; an unknown
/// cadence cannot reach this function.
pub fn affected_days(recurrence: RecurrenceType, reference: DateTime<Utc>) -> Vec<DayOfWeek> {
    match recurrence {
        RecurrenceType::Daily => DayOfWeek::ALL.to_vec(),
        RecurrenceType::Weekly | RecurrenceType::Monthly => {
            vec![DayOfWeek::from(reference.weekday())]
        }
    }
}
