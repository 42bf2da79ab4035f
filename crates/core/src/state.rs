use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::job::{CompletionRecord, Job};
use crate::member::Member;

/// The whole persisted aggregate: every group, job, and completion record.
///
/// Loaded and saved as one document; `Default` is the empty aggregate a
/// fresh install starts from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub groups: Vec<Group>,
    pub jobs: Vec<Job>,
    pub completion_history: Vec<CompletionRecord>,
}

impl AppState {
    pub fn find_group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Look a member up across all groups.
    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.groups.iter().find_map(|g| g.find_member(member_id))
    }

    pub fn find_job(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == job_id)
    }
}
