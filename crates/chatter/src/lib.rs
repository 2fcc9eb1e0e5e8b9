//! Chatter: CSV-backed user account and status update manager.
//!
//! Two in-memory keyed collections (user accounts and status updates)
//! with CRUD operations, plus bulk load/save against CSV files.
//!
//! # Core Contracts
//!
//! - **Unique keys**: `add` on an existing id fails and leaves the stored
//!   record untouched.
//! - **Sentinel on miss**: `search` always returns a record; a miss yields
//!   one with every field unset (see `is_empty`).
//! - **Partial-failure loads**: a malformed row aborts the load, keeping
//!   rows already inserted (no rollback); re-loading over existing keys is
//!   not an error.
//!
//! # Example
//!
//! ```no_run
//! use chatter::{UserCollection, persistence};
//!
//! let mut users = UserCollection::new();
//! persistence::load_users("accounts.csv", &mut users).unwrap();
//!
//! let eve = users.search("evmiles97");
//! println!("{} <{}>", eve.first_name, eve.email);
//! ```

pub mod app;
pub mod error;
pub mod persistence;

mod record;
mod status;
mod users;

pub use error::{ChatterError, Result};
pub use record::{StatusRecord, UserRecord};
pub use status::StatusCollection;
pub use users::UserCollection;
