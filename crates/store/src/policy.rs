//! Write-path mutation policies.
//!
//! Business rules the aggregate's write path must uphold atomically with
//! the triggering mutation. They live here as pure checks over candidate
//! state so every write entry point applies the same rules; the scheduling
//! core never evaluates them.

use kin_core::{AppState, Group};

use crate::error::StoreError;

/// Reject any group write that would leave the group without an admin.
///
/// Covers demoting the last admin as well as removing them: the check runs
/// against the candidate (post-mutation) group, whatever the edit was.
pub fn check_admin_retained(candidate: &Group) -> Result<(), StoreError> {
    if candidate.admin_count() == 0 {
        return Err(StoreError::LastAdmin {
            group_id: candidate.id.clone(),
        });
    }
    Ok(())
}

/// Reject removing a member while jobs are still assigned to them.
///
/// The jobs must be reassigned or deleted first.
pub fn check_member_unassigned(state: &AppState, member_id: &str) -> Result<(), StoreError> {
    let job_count = state
        .jobs
        .iter()
        .filter(|j| j.assigned_to == member_id)
        .count();
    if job_count > 0 {
        return Err(StoreError::MemberHasJobs {
            member_id: member_id.to_string(),
            job_count,
        });
    }
    Ok(())
}
