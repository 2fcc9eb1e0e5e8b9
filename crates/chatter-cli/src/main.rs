//! Chatter CLI - CSV-backed user account and status update manager.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::User { action } => commands::users::run(action),
        Commands::Status { action } => commands::status::run(action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
