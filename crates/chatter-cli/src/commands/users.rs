//! User account commands - CRUD against an accounts CSV file.

use std::path::Path;

use colored::Colorize;

use chatter::{UserCollection, persistence};

use crate::cli::UserAction;

pub fn run(action: UserAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        UserAction::Add {
            file,
            user_id,
            email,
            first_name,
            last_name,
        } => {
            let mut users = load_or_new(&file)?;
            users.add(&user_id, &email, &first_name, &last_name)?;
            persistence::save_users(&file, &users)?;

            println!(
                "{} {} ({} {})",
                "Added user".green().bold(),
                user_id.white(),
                first_name,
                last_name
            );
            Ok(())
        }

        UserAction::Update {
            file,
            user_id,
            email,
            first_name,
            last_name,
        } => {
            let mut users = load_existing(&file)?;
            users.modify(&user_id, &email, &first_name, &last_name)?;
            persistence::save_users(&file, &users)?;

            println!("{} {}", "Updated user".green().bold(), user_id.white());
            Ok(())
        }

        UserAction::Delete { file, user_id } => {
            let mut users = load_existing(&file)?;
            users.delete(&user_id)?;
            persistence::save_users(&file, &users)?;

            println!("{} {}", "Deleted user".green().bold(), user_id.white());
            Ok(())
        }

        UserAction::Search {
            file,
            user_id,
            json,
        } => {
            let users = load_existing(&file)?;
            let record = users.search(&user_id);
            if record.is_empty() {
                return Err(format!("user '{}' not found", user_id).into());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!(
                    "{} {} {} <{}>",
                    record.user_id.cyan().bold(),
                    record.first_name,
                    record.last_name,
                    record.email
                );
            }
            Ok(())
        }

        UserAction::List { file } => {
            let users = load_existing(&file)?;
            for record in users.iter() {
                println!(
                    "{} {} {} <{}>",
                    record.user_id.cyan().bold(),
                    record.first_name,
                    record.last_name,
                    record.email
                );
            }
            println!();
            println!("{} account(s)", users.len().to_string().white().bold());
            Ok(())
        }
    }
}

/// Load the accounts file, or start empty when it does not exist yet.
fn load_or_new(path: &Path) -> Result<UserCollection, Box<dyn std::error::Error>> {
    let mut users = UserCollection::new();
    if path.exists() {
        persistence::load_users(path, &mut users)?;
    }
    Ok(users)
}

/// Load the accounts file, failing with a hint when it does not exist.
fn load_existing(path: &Path) -> Result<UserCollection, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!(
            "Accounts file not found: {}\nRun 'chatter user add' to create it.",
            path.display()
        )
        .into());
    }

    let mut users = UserCollection::new();
    persistence::load_users(path, &mut users)?;
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_new_starts_empty_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let users = load_or_new(&dir.path().join("accounts.csv")).unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_load_existing_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_existing(&dir.path().join("accounts.csv")).unwrap_err();
        assert!(err.to_string().contains("Accounts file not found"));
    }

    #[test]
    fn test_add_creates_file_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("accounts.csv");

        run(UserAction::Add {
            file: file.clone(),
            user_id: "evmiles97".to_string(),
            email: "eve.miles@uw.edu".to_string(),
            first_name: "Eve".to_string(),
            last_name: "Miles".to_string(),
        })
        .unwrap();

        let users = load_existing(&file).unwrap();
        assert_eq!(users.search("evmiles97").email, "eve.miles@uw.edu");
    }

    #[test]
    fn test_update_on_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(UserAction::Update {
            file: dir.path().join("accounts.csv"),
            user_id: "evmiles97".to_string(),
            email: "e@x".to_string(),
            first_name: "Eve".to_string(),
            last_name: "Miles".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_search_unknown_user_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("accounts.csv");

        run(UserAction::Add {
            file: file.clone(),
            user_id: "dave03".to_string(),
            email: "david.yuen@gmail.com".to_string(),
            first_name: "David".to_string(),
            last_name: "Yuen".to_string(),
        })
        .unwrap();

        let err = run(UserAction::Search {
            file,
            user_id: "nobody".to_string(),
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
