use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::member::{Member, MemberRole};

/// A household/team sharing a pool of jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub members: Vec<Member>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Number of members holding the admin role.
    pub fn admin_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.role == MemberRole::Admin)
            .count()
    }

    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }
}
