use thiserror::Error;

/// A stored time-of-day string did not parse as `HH:mm`.
///
/// Raised at containment-check time: availability windows are persisted as
/// raw strings, so a malformed window surfaces when it is first compared
/// against a job's due time, not at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time format '{0}', expected HH:mm")]
pub struct TimeFormatError(pub String);

/// A recurrence string was none of `daily`, `weekly`, `monthly`.
///
/// Only reachable at the parsing edge (CLI args, hand-edited JSON); inside
/// the crate recurrence is a closed enum and cannot hold other values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown recurrence type '{0}', expected daily, weekly, or monthly")]
pub struct ParseRecurrenceError(pub String);
