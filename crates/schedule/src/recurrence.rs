//! Due-date advancement after a completion event.

use chrono::{DateTime, Duration, Months, Utc};

use kin_core::RecurrenceType;

/// Next due timestamp after completing an occurrence due at `current_due`.
///
/// Daily and weekly add whole days; monthly increments the month field,
/// rolling the year at December and clamping day-of-month at short months
/// (Jan 31 -> Feb 28/29), which is chrono's normalization and accepted
/// behavior here.
///
/// Invoked exactly once per completion event. Calling it again with the
/// already-advanced value advances further; callers must not double-apply.
pub fn advance(current_due: DateTime<Utc>, recurrence: RecurrenceType) -> DateTime<Utc> {
    match recurrence {
        RecurrenceType::Daily => current_due + Duration::days(1),
        RecurrenceType::Weekly => current_due + Duration::days(7),
        RecurrenceType::Monthly => current_due + Months::new(1),
    }
}
