//! Availability validation for candidate job occurrences.
//!
//! A job occurrence is checked against the assigned member's weekly
//! availability: the recurrence type decides which calendar days matter
//! ([`affected_days`]), and every affected day must have at least one
//! window containing the job's due time-of-day. The verdict is a tagged
//! [`AvailabilityCheck`] so callers can branch on severity (hard block vs.
//! soft warning) without parsing the reason text.

mod check;
mod days;


pub use self::check::{check_availability, AvailabilityCheck};
pub use self::days::affected_days;
