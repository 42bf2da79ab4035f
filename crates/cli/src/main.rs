mod cli;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::warn;

use kin_core::{
    config, new_id, Group, Job, Member, MemberRole, TimeWindow, WeeklyAvailability,
};
use kin_schedule::check_availability;
use kin_store::StateStore;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    config::load_dotenv();
    let args = Cli::parse();

    let data_dir = args
        .data_dir
        .unwrap_or_else(|| kin_core::Config::from_env().data_dir);
    let store = StateStore::new(&data_dir)
        .with_context(|| format!("failed to open state store at {}", data_dir.display()))?;

    match args.command {
        Command::CreateGroup {
            name,
            admin_name,
            admin_email,
        } => {
            let now = Utc::now();
            let admin = Member {
                id: new_id(),
                name: admin_name,
                email: admin_email,
                role: MemberRole::Admin,
                availability: WeeklyAvailability::default(),
                job_preferences: Default::default(),
            };
            let group = Group {
                id: new_id(),
                name,
                members: vec![admin],
                created_at: now,
                updated_at: now,
            };
            let id = group.id.clone();
            store.add_group(group)?;
            println!("created group {}", id);
        }

        Command::Groups => {
            for group in store.load().groups {
                println!("{}  {}", group.id, group.name);
                for m in &group.members {
                    println!("    {}  {} <{}>  {:?}", m.id, m.name, m.email, m.role);
                }
            }
        }

        Command::AddMember {
            group_id,
            name,
            email,
            admin,
        } => {
            let state = store.load();
            let mut group = state
                .find_group(&group_id)
                .cloned()
                .with_context(|| format!("no such group: {}", group_id))?;
            let member = Member {
                id: new_id(),
                name,
                email,
                role: if admin {
                    MemberRole::Admin
                } else {
                    MemberRole::Member
                },
                availability: WeeklyAvailability::default(),
                job_preferences: Default::default(),
            };
            let id = member.id.clone();
            group.members.push(member);
            group.updated_at = Utc::now();
            store.update_group(group)?;
            println!("added member {}", id);
        }

        Command::RemoveMember {
            group_id,
            member_id,
        } => {
            store.remove_member(&group_id, &member_id)?;
            println!("removed member {}", member_id);
        }

        Command::SetAvailability {
            group_id,
            member_id,
            day,
            windows,
        } => {
            let windows = windows
                .iter()
                .map(|w| parse_window(w))
                .collect::<Result<Vec<_>>>()?;

            let state = store.load();
            let mut group = state
                .find_group(&group_id)
                .cloned()
                .with_context(|| format!("no such group: {}", group_id))?;
            let member = group
                .members
                .iter_mut()
                .find(|m| m.id == member_id)
                .with_context(|| format!("no such member: {}", member_id))?;
            member.availability.set_windows(day, windows);
            group.updated_at = Utc::now();
            store.update_group(group)?;
            println!("updated {} availability for {}", day, member_id);
        }

        Command::CreateJob {
            title,
            group,
            member,
            recurrence,
            due,
            description,
            force,
        } => {
            let state = store.load();
            let assignee = state
                .find_member(&member)
                .with_context(|| format!("no such member: {}", member))?;

            let now = Utc::now();
            let job = Job {
                id: new_id(),
                title,
                description,
                group_id: group,
                assigned_to: member,
                recurrence,
                start_date: due,
                next_due_date: due,
                last_completed_date: None,
                created_at: now,
                updated_at: now,
            };

            let verdict = check_availability(assignee, &job)?;
            if let Some(reason) = verdict.reason() {
                if !force {
                    bail!("{} (use --force to create anyway)", reason);
                }
                warn!("{}, creating anyway", reason);
            }

            let id = job.id.clone();
            store.add_job(job)?;
            println!("created job {}", id);
        }

        Command::Jobs { group, member } => {
            let jobs = match (group, member) {
                (Some(g), _) => store.jobs_for_group(&g),
                (None, Some(m)) => store.jobs_for_member(&m),
                (None, None) => store.load().jobs,
            };
            for job in jobs {
                println!(
                    "{}  {}  {}  next due {}  assigned to {}",
                    job.id, job.title, job.recurrence, job.next_due_date, job.assigned_to
                );
            }
        }

        Command::Check { job_id } => {
            let state = store.load();
            let job = state
                .find_job(&job_id)
                .with_context(|| format!("no such job: {}", job_id))?;
            let assignee = state
                .find_member(&job.assigned_to)
                .with_context(|| format!("assignee not found: {}", job.assigned_to))?;

            let verdict = check_availability(assignee, job)?;
            match verdict.reason() {
                None => println!("available"),
                Some(reason) => println!("unavailable: {}", reason),
            }
        }

        Command::Complete { job_id, member_id } => {
            let job = store.complete_job(&job_id, &member_id, Utc::now())?;
            println!("completed '{}', next due {}", job.title, job.next_due_date);
        }
    }

    Ok(())
}

/// Parse a `HH:mm-HH:mm` window argument.
fn parse_window(s: &str) -> Result<TimeWindow> {
    let (start, end) = s
        .split_once('-')
        .with_context(|| format!("invalid window '{}', expected HH:mm-HH:mm", s))?;
    // Validate both bounds up front so bad input fails here, not later
    // inside an availability check.
    start
        .parse::<kin_core::TimeOfDay>()
        .with_context(|| format!("invalid window start '{}'", start))?;
    end.parse::<kin_core::TimeOfDay>()
        .with_context(|| format!("invalid window end '{}'", end))?;
    Ok(TimeWindow::new(start, end))
}
