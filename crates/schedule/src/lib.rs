//! Scheduling core for recurring jobs.
//!
//! This crate provides the two pure algorithms everything else composes:
//! - availability validation — can the assigned member actually do a job
//!   occurrence, and if not, a graded explanation of why not
//! - recurrence advancement — the next due timestamp after a completion
//!
//! No I/O, no shared state; both are plain functions of their arguments
//! and can be called concurrently without coordination.

pub mod availability;
pub mod recurrence;

pub use availability::{affected_days, check_availability, AvailabilityCheck};
pub use recurrence::advance;
