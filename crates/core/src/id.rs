use uuid::Uuid;

/// Generate a fresh opaque identifier.
///
/// Ids are stored and compared as plain strings; nothing in the domain
/// model depends on them being UUIDs.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
