use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use kin_core::{DayOfWeek, RecurrenceType};

/// Household job scheduler — groups, members, and recurring jobs.
#[derive(Parser, Debug)]
#[command(name = "kin", version, about)]
pub struct Cli {
    /// Base directory for persisted state.
    #[arg(long, env = "KIN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a group with its first admin member.
    CreateGroup {
        name: String,
        /// Name of the founding admin.
        #[arg(long)]
        admin_name: String,
        /// Email of the founding admin.
        #[arg(long)]
        admin_email: String,
    },

    /// List groups and their members.
    Groups,

    /// Add a member to a group.
    AddMember {
        group_id: String,
        name: String,
        email: String,
        /// Grant the admin role.
        #[arg(long)]
        admin: bool,
    },

    /// Remove a member from a group (rejected while jobs are assigned).
    RemoveMember {
        group_id: String,
        member_id: String,
    },

    /// Replace a member's availability windows for one day.
    SetAvailability {
        group_id: String,
        member_id: String,
        /// Day to replace, e.g. `monday`.
        day: DayOfWeek,
        /// Windows as `HH:mm-HH:mm`; none clears the day.
        windows: Vec<String>,
    },

    /// Create a job, checking the assignee's availability first.
    CreateJob {
        title: String,
        #[arg(long)]
        group: String,
        /// Member id of the assignee.
        #[arg(long)]
        member: String,
        /// daily, weekly, or monthly.
        #[arg(long)]
        recurrence: RecurrenceType,
        /// First due timestamp, RFC 3339 (e.g. 2026-09-07T10:00:00Z).
        #[arg(long)]
        due: DateTime<Utc>,
        #[arg(long)]
        description: Option<String>,
        /// Create even if the assignee is unavailable.
        #[arg(long)]
        force: bool,
    },

    /// List jobs, optionally filtered.
    Jobs {
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        member: Option<String>,
    },

    /// Check whether a job's assignee is available at its next due time.
    Check { job_id: String },

    /// Mark a job occurrence complete and advance its due date.
    Complete {
        job_id: String,
        /// Member id of whoever completed it.
        #[arg(long = "by")]
        member_id: String,
    },
}
