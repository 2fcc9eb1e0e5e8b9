//! Boolean-surface facade over the collections and persistence layer.
//!
//! These functions are the interface handed to external drivers (the CLI,
//! scripts): every outcome is a plain success flag or a record-or-sentinel,
//! never an error value. Error detail is deliberately discarded here;
//! callers that want messages use the `Result`-returning layers directly.

use std::path::Path;

use crate::persistence;
use crate::record::{StatusRecord, UserRecord};
use crate::status::StatusCollection;
use crate::users::UserCollection;

/// Create an empty user collection.
pub fn init_user_collection() -> UserCollection {
    UserCollection::new()
}

/// Create an empty status collection.
pub fn init_status_collection() -> StatusCollection {
    StatusCollection::new()
}

/// Load user accounts from a CSV file; `false` on any fault.
pub fn load_users(path: impl AsRef<Path>, collection: &mut UserCollection) -> bool {
    persistence::load_users(path, collection).is_ok()
}

/// Save user accounts to a CSV file; `false` on any fault.
pub fn save_users(path: impl AsRef<Path>, collection: &UserCollection) -> bool {
    persistence::save_users(path, collection).is_ok()
}

/// Load status updates from a CSV file; `false` on any fault.
pub fn load_status_updates(path: impl AsRef<Path>, collection: &mut StatusCollection) -> bool {
    persistence::load_status_updates(path, collection).is_ok()
}

/// Save status updates to a CSV file; `false` on any fault.
pub fn save_status_updates(path: impl AsRef<Path>, collection: &StatusCollection) -> bool {
    persistence::save_status_updates(path, collection).is_ok()
}

/// Add a new user; `false` if the id already exists.
pub fn add_user(
    user_id: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    collection: &mut UserCollection,
) -> bool {
    collection.add(user_id, email, first_name, last_name).is_ok()
}

/// Update an existing user's payload; `false` if the id is unknown.
pub fn update_user(
    user_id: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    collection: &mut UserCollection,
) -> bool {
    collection
        .modify(user_id, email, first_name, last_name)
        .is_ok()
}

/// Delete a user; `false` if the id is unknown.
pub fn delete_user(user_id: &str, collection: &mut UserCollection) -> bool {
    collection.delete(user_id).is_ok()
}

/// Look up a user; sentinel record on a miss.
pub fn search_user(user_id: &str, collection: &UserCollection) -> UserRecord {
    collection.search(user_id)
}

/// Add a new status update; `false` if the id already exists.
///
/// This is the one boundary required to absorb any fault from the
/// underlying store, not just the documented duplicate-id case.
pub fn add_status(
    status_id: &str,
    user_id: &str,
    status_text: &str,
    collection: &mut StatusCollection,
) -> bool {
    collection.add(status_id, user_id, status_text).is_ok()
}

/// Update an existing status update's payload; `false` if the id is unknown.
pub fn update_status(
    status_id: &str,
    user_id: &str,
    status_text: &str,
    collection: &mut StatusCollection,
) -> bool {
    collection.modify(status_id, user_id, status_text).is_ok()
}

/// Delete a status update; `false` if the id is unknown.
pub fn delete_status(status_id: &str, collection: &mut StatusCollection) -> bool {
    collection.delete(status_id).is_ok()
}

/// Look up a status update; sentinel record on a miss.
pub fn search_status(status_id: &str, collection: &StatusCollection) -> StatusRecord {
    collection.search(status_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_search_user() {
        let mut users = init_user_collection();
        assert!(add_user(
            "evmiles97",
            "eve.miles@uw.edu",
            "Eve",
            "Miles",
            &mut users
        ));
        assert!(!add_user(
            "evmiles97",
            "eve.miles@uw.edu",
            "Eve",
            "Miles",
            &mut users
        ));

        assert_eq!(search_user("evmiles97", &users).email, "eve.miles@uw.edu");
        assert!(search_user("nobody", &users).is_empty());
    }

    #[test]
    fn test_update_and_delete_user() {
        let mut users = init_user_collection();
        add_user("dave03", "d@gmail.com", "David", "Yuen", &mut users);

        assert!(update_user("dave03", "dy@gmail.com", "David", "Yuen", &mut users));
        assert!(!update_user("nobody", "x@y.z", "X", "Y", &mut users));

        assert!(delete_user("dave03", &mut users));
        assert!(!delete_user("dave03", &mut users));
    }

    #[test]
    fn test_status_lifecycle() {
        let mut statuses = init_status_collection();
        assert!(add_status(
            "evmiles97_00001",
            "evmiles97",
            "Code is finally compiling",
            &mut statuses
        ));
        assert!(!add_status("evmiles97_00001", "evmiles97", "again", &mut statuses));

        assert!(update_status(
            "evmiles97_00001",
            "evmiles97",
            "Updated status text",
            &mut statuses
        ));
        assert_eq!(
            search_status("evmiles97_00001", &statuses).status_text,
            "Updated status text"
        );

        assert!(!update_status("missing_00001", "evmiles97", "text", &mut statuses));
        assert_eq!(statuses.len(), 1);

        assert!(delete_status("evmiles97_00001", &mut statuses));
        assert!(search_status("evmiles97_00001", &statuses).is_empty());
    }
}
