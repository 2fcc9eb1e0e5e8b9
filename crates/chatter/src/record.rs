//! Record types for user accounts and status updates.
//!
//! The serde renames map struct fields to the uppercase column labels used
//! by the CSV files, so the same types serve as both in-memory records and
//! CSV row (de)serialization targets.

use serde::{Deserialize, Serialize};

/// A single user account.
///
/// `user_id` is the unique key; it never changes once the record is in a
/// collection. The `Default` value (all fields empty) doubles as the
/// sentinel returned by search on a miss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique account identifier.
    #[serde(rename = "USER_ID")]
    pub user_id: String,
    /// Contact email address.
    #[serde(rename = "EMAIL")]
    pub email: String,
    /// Given name.
    #[serde(rename = "NAME")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "LASTNAME")]
    pub last_name: String,
}

impl UserRecord {
    /// Create a new user record.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Whether every field is unset.
    ///
    /// True only for the sentinel returned by a search miss; collections
    /// never store a record without a `user_id`.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_empty()
            && self.email.is_empty()
            && self.first_name.is_empty()
            && self.last_name.is_empty()
    }
}

/// A single status update.
///
/// `status_id` is the unique key. `user_id` references a [`UserRecord`] by
/// convention only; dangling references are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Unique status identifier.
    #[serde(rename = "STATUS_ID")]
    pub status_id: String,
    /// Account that posted the update.
    #[serde(rename = "USER_ID")]
    pub user_id: String,
    /// Body of the update.
    #[serde(rename = "STATUS_TEXT")]
    pub status_text: String,
}

impl StatusRecord {
    /// Create a new status record.
    pub fn new(
        status_id: impl Into<String>,
        user_id: impl Into<String>,
        status_text: impl Into<String>,
    ) -> Self {
        Self {
            status_id: status_id.into(),
            user_id: user_id.into(),
            status_text: status_text.into(),
        }
    }

    /// Whether every field is unset (the search-miss sentinel).
    pub fn is_empty(&self) -> bool {
        self.status_id.is_empty() && self.user_id.is_empty() && self.status_text.is_empty()
    }

    /// Compose a status id from a user id and sequence number using the
    /// `<user_id>_<5-digit-sequence>` convention.
    ///
    /// This is a caller convention, not an invariant: collections accept
    /// any non-colliding id.
    ///
    /// # Example
    ///
    /// ```
    /// use chatter::StatusRecord;
    ///
    /// assert_eq!(StatusRecord::compose_id("evmiles97", 1), "evmiles97_00001");
    /// ```
    pub fn compose_id(user_id: &str, sequence: u32) -> String {
        format!("{}_{:05}", user_id, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sentinel() {
        assert!(UserRecord::default().is_empty());
        assert!(StatusRecord::default().is_empty());
    }

    #[test]
    fn test_populated_record_is_not_sentinel() {
        let user = UserRecord::new("evmiles97", "eve.miles@uw.edu", "Eve", "Miles");
        assert!(!user.is_empty());

        let status = StatusRecord::new("evmiles97_00001", "evmiles97", "Compiling");
        assert!(!status.is_empty());
    }

    #[test]
    fn test_compose_id_zero_pads() {
        assert_eq!(StatusRecord::compose_id("evmiles97", 1), "evmiles97_00001");
        assert_eq!(StatusRecord::compose_id("dave03", 12345), "dave03_12345");
        assert_eq!(StatusRecord::compose_id("dave03", 123456), "dave03_123456");
    }
}
