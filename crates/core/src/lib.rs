//! Shared domain model for the kinkeeper scheduler: groups, members,
//! weekly availability, recurring jobs, and the persisted aggregate shape.

pub mod config;
pub mod error;
pub mod group;
pub mod id;
pub mod job;
pub mod member;
pub mod state;
pub mod time;

pub use config::Config;
pub use error::*;
pub use group::*;
pub use id::new_id;
pub use job::*;
pub use member::*;
pub use state::*;
pub use time::*;
