//! Keyed in-memory store of status updates.

use indexmap::IndexMap;

use crate::error::{ChatterError, Result};
use crate::record::StatusRecord;

/// Collection of [`StatusRecord`]s keyed by `status_id`.
///
/// Same contract as [`crate::UserCollection`]: exclusive ownership of the
/// map, typed errors for key conflicts, sentinel record on search miss.
/// The `user_id` carried by each record is not checked against any user
/// collection; dangling references are allowed.
#[derive(Debug, Clone, Default)]
pub struct StatusCollection {
    records: IndexMap<String, StatusRecord>,
}

impl StatusCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new status update.
    ///
    /// Fails with [`ChatterError::DuplicateId`] if `status_id` is already
    /// present; the existing record is left untouched.
    pub fn add(&mut self, status_id: &str, user_id: &str, status_text: &str) -> Result<()> {
        if self.records.contains_key(status_id) {
            return Err(ChatterError::DuplicateId(status_id.to_string()));
        }

        self.records.insert(
            status_id.to_string(),
            StatusRecord::new(status_id, user_id, status_text),
        );
        Ok(())
    }

    /// Overwrite the payload of an existing status update in place.
    ///
    /// Both `user_id` and `status_text` are payload here; only the
    /// identity `status_id` is fixed. Fails with
    /// [`ChatterError::UnknownId`] if the status does not exist.
    pub fn modify(&mut self, status_id: &str, user_id: &str, status_text: &str) -> Result<()> {
        let record = self
            .records
            .get_mut(status_id)
            .ok_or_else(|| ChatterError::UnknownId(status_id.to_string()))?;

        record.user_id = user_id.to_string();
        record.status_text = status_text.to_string();
        Ok(())
    }

    /// Remove a status update.
    ///
    /// Fails with [`ChatterError::UnknownId`] if the status does not exist.
    pub fn delete(&mut self, status_id: &str) -> Result<()> {
        self.records
            .shift_remove(status_id)
            .map(|_| ())
            .ok_or_else(|| ChatterError::UnknownId(status_id.to_string()))
    }

    /// Look up a status update by id.
    ///
    /// Returns a sentinel record with every field unset on a miss; never
    /// fails.
    pub fn search(&self, status_id: &str) -> StatusRecord {
        self.records.get(status_id).cloned().unwrap_or_default()
    }

    /// Whether a status id is present.
    pub fn contains(&self, status_id: &str) -> bool {
        self.records.contains_key(status_id)
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
    pub fn iter(&self) -> impl Iterator<Item = &StatusRecord> {
        self.records.values()
    }
}
