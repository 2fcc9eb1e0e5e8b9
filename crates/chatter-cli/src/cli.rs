//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chatter: CSV-backed user account and status update manager
#[derive(Parser)]
#[command(name = "chatter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage status updates
    Status {
        #[command(subcommand)]
        action: StatusAction,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Add a new user account
    Add {
        /// Path to the accounts CSV file (created if absent)
        #[arg(short, long, default_value = "accounts.csv")]
        file: PathBuf,

        /// Unique user id
        user_id: String,

        /// Email address
        email: String,

        /// Given name
        first_name: String,

        /// Family name
        last_name: String,
    },

    /// Update an existing user account
    Update {
        /// Path to the accounts CSV file
        #[arg(short, long, default_value = "accounts.csv")]
        file: PathBuf,

        /// Id of the account to update
        user_id: String,

        /// New email address
        email: String,

        /// New given name
        first_name: String,

        /// New family name
        last_name: String,
    },

    /// Delete a user account
    Delete {
        /// Path to the accounts CSV file
        #[arg(short, long, default_value = "accounts.csv")]
        file: PathBuf,

        /// Id of the account to delete
        user_id: String,
    },

    /// Look up a user account by id
    Search {
        /// Path to the accounts CSV file
        #[arg(short, long, default_value = "accounts.csv")]
        file: PathBuf,

        /// Id of the account to find
        user_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all user accounts
    List {
        /// Path to the accounts CSV file
        #[arg(short, long, default_value = "accounts.csv")]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum StatusAction {
    /// Add a new status update
    Add {
        /// Path to the status CSV file (created if absent)
        #[arg(short, long, default_value = "status_updates.csv")]
        file: PathBuf,

        /// Id of the posting user
        user_id: String,

        /// Body of the update
        status_text: String,

        /// Explicit status id (default: composed as <user_id>_<seq>)
        #[arg(long, conflicts_with = "seq")]
        status_id: Option<String>,

        /// Sequence number for the composed status id
        #[arg(long, default_value = "1")]
        seq: u32,
    },

    /// Update an existing status update
    Update {
        /// Path to the status CSV file
        #[arg(short, long, default_value = "status_updates.csv")]
        file: PathBuf,

        /// Id of the status to update
        status_id: String,

        /// New posting user id
        user_id: String,

        /// New body text
        status_text: String,
    },

    /// Delete a status update
    Delete {
        /// Path to the status CSV file
        #[arg(short, long, default_value = "status_updates.csv")]
        file: PathBuf,

        /// Id of the status to delete
        status_id: String,
    },

    /// Look up a status update by id
    Search {
        /// Path to the status CSV file
        #[arg(short, long, default_value = "status_updates.csv")]
        file: PathBuf,

        /// Id of the status to find
        status_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all status updates
    List {
        /// Path to the status CSV file
        #[arg(short, long, default_value = "status_updates.csv")]
        file: PathBuf,
    },
}
