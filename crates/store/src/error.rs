use thiserror::Error;

/// Errors produced by [`StateStore`](super::StateStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("group '{group_id}' would be left with no admin")]
    LastAdmin { group_id: String },
    #[error("member '{member_id}' still has {job_count} assigned job(s)")]
    MemberHasJobs {
        member_id: String,
        job_count: usize,
    },
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("group not found: {0}")]
    GroupNotFound(String),
}
