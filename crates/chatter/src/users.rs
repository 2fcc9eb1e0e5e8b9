//! Keyed in-memory store of user accounts.

use indexmap::IndexMap;

use crate::error::{ChatterError, Result};
use crate::record::UserRecord;

/// Collection of [`UserRecord`]s keyed by `user_id`.
///
/// The map is owned exclusively by the collection; callers go through the
/// documented operations and never hold a reference into it.
#[derive(Debug, Clone, Default)]
pub struct UserCollection {
    records: IndexMap<String, UserRecord>,
}

impl UserCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new user.
    ///
    /// Fails with [`ChatterError::DuplicateId`] if `user_id` is already
    /// present; the existing record is left untouched.
    pub fn add(
        &mut self,
        user_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<()> {
        if self.records.contains_key(user_id) {
            return Err(ChatterError::DuplicateId(user_id.to_string()));
        }

        self.records.insert(
            user_id.to_string(),
            UserRecord::new(user_id, email, first_name, last_name),
        );
        Ok(())
    }

    /// Overwrite the payload fields of an existing user in place.
    ///
    /// The identity `user_id` never changes. Fails with
    /// [`ChatterError::UnknownId`] if the user does not exist.
    pub fn modify(
        &mut self,
        user_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<()> {
        let record = self
            .records
            .get_mut(user_id)
            .ok_or_else(|| ChatterError::UnknownId(user_id.to_string()))?;

        record.email = email.to_string();
        record.first_name = first_name.to_string();
        record.last_name = last_name.to_string();
        Ok(())
    }

    /// Remove a user.
    ///
    /// Fails with [`ChatterError::UnknownId`] if the user does not exist.
    pub fn delete(&mut self, user_id: &str) -> Result<()> {
        // shift_remove keeps the remaining insertion order intact
        self.records
            .shift_remove(user_id)
            .map(|_| ())
            .ok_or_else(|| ChatterError::UnknownId(user_id.to_string()))
    }

    /// Look up a user by id.
    ///
    /// Returns a sentinel record with every field unset on a miss; never
    /// fails. Callers distinguish a miss via [`UserRecord::is_empty`].
    pub fn search(&self, user_id: &str) -> UserRecord {
        self.records.get(user_id).cloned().unwrap_or_default()
    }

    /// Whether a user id is present.
    pub fn contains(&self, user_id: &str) -> bool {
        self.records.contains_key(user_id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.records.values()
    }
}
