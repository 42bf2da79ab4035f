//! Whole-document aggregate store.
//!
//! One JSON file holds the entire aggregate (groups with nested members,
//! jobs, completion history). Reads load the document wholesale; writes go
//! through [`StateStore::update`], the single transaction boundary, so the
//! write-path policies (last-admin protection, referential integrity on
//! member removal) are enforced atomically with the mutation they guard.

mod error;
pub mod policy;
mod store;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

pub use error::StoreError;
pub use store::StateStore;
