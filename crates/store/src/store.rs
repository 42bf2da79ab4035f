use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use kin_core::{AppState, CompletionRecord, Group, Job};
use kin_schedule::advance;

use crate::error::StoreError;
use crate::policy::{check_admin_retained, check_member_unassigned};

/// Filesystem-backed aggregate persistence.
///
/// The whole aggregate lives in one document:
/// ```text
/// data/
///   state.json    <- groups[] (with nested members), jobs[], completionHistory[]
/// ```
/// Semantics are read-then-overwrite-wholesale with a single writer
/// assumed. Two processes racing on the same file are last-writer-wins;
/// that is a documented limitation, not something this store detects.
pub struct StateStore {
    base_dir: PathBuf,
}

impl StateStore {
    /// Create a new StateStore, ensuring the directory exists.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Base path for this store.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn state_path(&self) -> PathBuf {
        self.base_dir.join("state.json")
    }

    // ── Whole-document load/save ────────────────────────────────

    /// Load the aggregate. Never fails: a missing file is a fresh install
    /// and undecodable content falls back to the empty aggregate (logged).
    pub fn load(&self) -> AppState {
        let path = self.state_path();
        if !path.exists() {
            return AppState::default();
        }
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to read {}: {}, starting empty", path.display(), e);
                return AppState::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(state) => state,
            Err(e) => {
                warn!("failed to parse {}: {}, starting empty", path.display(), e);
                AppState::default()
            }
        }
    }

    /// Replace the persisted aggregate wholesale.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(self.state_path(), json)?;
        Ok(())
    }

    /// The transaction boundary: load, apply `f`, save, return the new
    /// state. When `f` errs nothing is persisted and the prior document is
    /// retained unchanged.
    pub fn update<F>(&self, f: F) -> Result<AppState, StoreError>
    where
        F: FnOnce(&mut AppState) -> Result<(), StoreError>,
    {
        let mut state = self.load();
        f(&mut state)?;
        self.save(&state)?;
        Ok(state)
    }

    // ── Read views ──────────────────────────────────────────────

    /// Jobs belonging to a group.
    pub fn jobs_for_group(&self, group_id: &str) -> Vec<Job> {
        self.load()
            .jobs
            .into_iter()
            .filter(|j| j.group_id == group_id)
            .collect()
    }

    /// Jobs assigned to a member.
    pub fn jobs_for_member(&self, member_id: &str) -> Vec<Job> {
        self.load()
            .jobs
            .into_iter()
            .filter(|j| j.assigned_to == member_id)
            .collect()
    }

    // ── Group writes ────────────────────────────────────────────

    /// Append a new group. The last-admin invariant applies from birth: a
    /// group cannot be created without an admin.
    pub fn add_group(&self, group: Group) -> Result<AppState, StoreError> {
        check_admin_retained(&group)?;
        self.update(|state| {
            state.groups.push(group);
            Ok(())
        })
    }

    /// Replace a group by id. No-op (state unchanged) when the id is
    /// unknown; rejected when the candidate has no admin left.
    pub fn update_group(&self, group: Group) -> Result<AppState, StoreError> {
        self.update(|state| {
            let Some(slot) = state.groups.iter_mut().find(|g| g.id == group.id) else {
                return Ok(());
            };
            check_admin_retained(&group)?;
            *slot = group;
            Ok(())
        })
    }

    /// Remove a member from a group, enforcing referential integrity (no
    /// assigned jobs) and the last-admin invariant atomically.
    pub fn remove_member(&self, group_id: &str, member_id: &str) -> Result<AppState, StoreError> {
        let group_id = group_id.to_string();
        let member_id = member_id.to_string();
        self.update(move |state| {
            check_member_unassigned(state, &member_id)?;

            let group = state
                .groups
                .iter_mut()
                .find(|g| g.id == group_id)
                .ok_or_else(|| StoreError::GroupNotFound(group_id.clone()))?;

            let mut candidate = group.clone();
            candidate.members.retain(|m| m.id != member_id);
            check_admin_retained(&candidate)?;
            candidate.updated_at = Utc::now();
            *group = candidate;
            Ok(())
        })
    }

    // ── Job writes ──────────────────────────────────────────────

    /// Append a new job.
    pub fn add_job(&self, job: Job) -> Result<AppState, StoreError> {
        self.update(|state| {
            state.jobs.push(job);
            Ok(())
        })
    }

    /// Replace a job by id. No-op (state unchanged) when the id is unknown.
    pub fn update_job(&self, job: Job) -> Result<AppState, StoreError> {
        self.update(|state| {
            if let Some(slot) = state.jobs.iter_mut().find(|j| j.id == job.id) {
                *slot = job;
            }
            Ok(())
        })
    }

    /// Record a completion event: appends a [`CompletionRecord`], stamps
    /// `last_completed_date`, and advances `next_due_date` per the job's
    /// recurrence. Applied once per completion; the caller must not
    /// re-submit the same event.
    pub fn complete_job(
        &self,
        job_id: &str,
        completed_by: &str,
        at: DateTime<Utc>,
    ) -> Result<Job, StoreError> {
        let job_id_owned = job_id.to_string();
        let completed_by = completed_by.to_string();
        let state = self.update(move |state| {
            let job = state
                .jobs
                .iter_mut()
                .find(|j| j.id == job_id_owned)
                .ok_or_else(|| StoreError::JobNotFound(job_id_owned.clone()))?;

            job.next_due_date = advance(job.next_due_date, job.recurrence);
            job.last_completed_date = Some(at);
            job.updated_at = at;

            state.completion_history.push(CompletionRecord {
                id: kin_core::new_id(),
                job_id: job_id_owned.clone(),
                completed_at: at,
                completed_by: completed_by.clone(),
            });
            Ok(())
        })?;

        let job = state
            .find_job(job_id)
            .cloned()
            .ok_or_else(|| StoreError::JobNotFound(job_id.to_string()))?;
        info!(
            "Completed '{}' ({}), next due {}",
            job.title, job.recurrence, job.next_due_date
        );
        Ok(job)
    }
}
