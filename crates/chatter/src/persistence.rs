//! Bulk CSV load and save for both collections.
//!
//! Load inserts rows as it goes and aborts on the first malformed row
//! without rolling back earlier inserts. Re-loading a source over a
//! collection that already holds some of its keys is not an error: a
//! duplicate id coming out of `add` is skipped, so load is idempotent
//! with respect to already-present records.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{ChatterError, Result};
use crate::record::{StatusRecord, UserRecord};
use crate::status::StatusCollection;
use crate::users::UserCollection;

/// Column order for the users file.
const USER_COLUMNS: [&str; 4] = ["USER_ID", "EMAIL", "NAME", "LASTNAME"];

/// Column order for the status file.
const STATUS_COLUMNS: [&str; 3] = ["STATUS_ID", "USER_ID", "STATUS_TEXT"];

/// Load user accounts from a CSV file into `collection`.
///
/// The file must carry a `USER_ID,EMAIL,NAME,LASTNAME` header. Every field
/// is required and must be non-empty; the first violation aborts the call.
pub fn load_users(path: impl AsRef<Path>, collection: &mut UserCollection) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ChatterError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    for (idx, result) in reader.deserialize::<UserRecord>().enumerate() {
        let row = idx + 1;
        let record: UserRecord = result?;

        require(&record.user_id, row, "USER_ID")?;
        require(&record.email, row, "EMAIL")?;
        require(&record.first_name, row, "NAME")?;
        require(&record.last_name, row, "LASTNAME")?;

        match collection.add(
            &record.user_id,
            &record.email,
            &record.first_name,
            &record.last_name,
        ) {
            Ok(()) | Err(ChatterError::DuplicateId(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Save all user accounts from `collection` to a CSV file.
///
/// Writes the header row even when the collection is empty. Records are
/// written in collection iteration order.
pub fn save_users(path: impl AsRef<Path>, collection: &UserCollection) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ChatterError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Header written explicitly so it appears for empty collections too;
    // struct field order matches USER_COLUMNS.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(USER_COLUMNS)?;
    for record in collection.iter() {
        writer.serialize(record)?;
    }

    writer.flush().map_err(|e| ChatterError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Load status updates from a CSV file into `collection`.
///
/// The file must carry a `STATUS_ID,USER_ID,STATUS_TEXT` header. Same
/// required-field and idempotence contract as [`load_users`].
pub fn load_status_updates(
    path: impl AsRef<Path>,
    collection: &mut StatusCollection,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ChatterError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    for (idx, result) in reader.deserialize::<StatusRecord>().enumerate() {
        let row = idx + 1;
        let record: StatusRecord = result?;

        require(&record.status_id, row, "STATUS_ID")?;
        require(&record.user_id, row, "USER_ID")?;
        require(&record.status_text, row, "STATUS_TEXT")?;

        match collection.add(&record.status_id, &record.user_id, &record.status_text) {
            Ok(()) | Err(ChatterError::DuplicateId(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Save all status updates from `collection` to a CSV file.
pub fn save_status_updates(path: impl AsRef<Path>, collection: &StatusCollection) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ChatterError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(STATUS_COLUMNS)?;
    for record in collection.iter() {
        writer.serialize(record)?;
    }

    writer.flush().map_err(|e| ChatterError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Reject a present-but-empty required field.
fn require(value: &str, row: usize, field: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(ChatterError::MissingField { row, field });
    }
    Ok(())
}
