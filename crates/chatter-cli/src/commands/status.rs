//! Status update commands - CRUD against a status CSV file.

use std::path::Path;

use colored::Colorize;

use chatter::{StatusCollection, StatusRecord, persistence};

use crate::cli::StatusAction;

pub fn run(action: StatusAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatusAction::Add {
            file,
            user_id,
            status_text,
            status_id,
            seq,
        } => {
            let status_id =
                status_id.unwrap_or_else(|| StatusRecord::compose_id(&user_id, seq));

            let mut statuses = load_or_new(&file)?;
            statuses.add(&status_id, &user_id, &status_text)?;
            persistence::save_status_updates(&file, &statuses)?;

            println!(
                "{} {} for {}",
                "Added status".green().bold(),
                status_id.white(),
                user_id
            );
            Ok(())
        }

        StatusAction::Update {
            file,
            status_id,
            user_id,
            status_text,
        } => {
            let mut statuses = load_existing(&file)?;
            statuses.modify(&status_id, &user_id, &status_text)?;
            persistence::save_status_updates(&file, &statuses)?;

            println!("{} {}", "Updated status".green().bold(), status_id.white());
            Ok(())
        }

        StatusAction::Delete { file, status_id } => {
            let mut statuses = load_existing(&file)?;
            statuses.delete(&status_id)?;
            persistence::save_status_updates(&file, &statuses)?;

            println!("{} {}", "Deleted status".green().bold(), status_id.white());
            Ok(())
        }

        StatusAction::Search {
            file,
            status_id,
            json,
        } => {
            let statuses = load_existing(&file)?;
            let record = statuses.search(&status_id);
            if record.is_empty() {
                return Err(format!("status '{}' not found", status_id).into());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_status(&record);
            }
            Ok(())
        }

        StatusAction::List { file } => {
            let statuses = load_existing(&file)?;
            for record in statuses.iter() {
                print_status(record);
            }
            println!();
            println!("{} update(s)", statuses.len().to_string().white().bold());
            Ok(())
        }
    }
}

fn print_status(record: &StatusRecord) {
    println!(
        "{} [{}] {}",
        record.status_id.cyan().bold(),
        record.user_id.yellow(),
        record.status_text
    );
}

/// Load the status file, or start empty when it does not exist yet.
fn load_or_new(path: &Path) -> Result<StatusCollection, Box<dyn std::error::Error>> {
    let mut statuses = StatusCollection::new();
    if path.exists() {
        persistence::load_status_updates(path, &mut statuses)?;
    }
    Ok(statuses)
}

/// Load the status file, failing with a hint when it does not exist.
fn load_existing(path: &Path) -> Result<StatusCollection, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!(
            "Status file not found: {}\nRun 'chatter status add' to create it.",
            path.display()
        )
        .into());
    }

    let mut statuses = StatusCollection::new();
    persistence::load_status_updates(path, &mut statuses)?;
    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_new_starts_empty_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let statuses = load_or_new(&dir.path().join("status_updates.csv")).unwrap();
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_load_existing_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_existing(&dir.path().join("status_updates.csv")).unwrap_err();
        assert!(err.to_string().contains("Status file not found"));
    }

    #[test]
    fn test_add_composes_id_from_seq() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("status_updates.csv");

        run(StatusAction::Add {
            file: file.clone(),
            user_id: "evmiles97".to_string(),
            status_text: "Code is finally compiling".to_string(),
            status_id: None,
            seq: 7,
        })
        .unwrap();

        let statuses = load_existing(&file).unwrap();
        assert_eq!(
            statuses.search("evmiles97_00007").status_text,
            "Code is finally compiling"
        );
    }

    #[test]
    fn test_add_honors_explicit_id() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("status_updates.csv");

        run(StatusAction::Add {
            file: file.clone(),
            user_id: "dave03".to_string(),
            status_text: "Sunny in Seattle".to_string(),
            status_id: Some("custom-id".to_string()),
            seq: 1,
        })
        .unwrap();

        let statuses = load_existing(&file).unwrap();
        assert!(statuses.contains("custom-id"));
    }

    #[test]
    fn test_update_persists_new_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("status_updates.csv");

        run(StatusAction::Add {
            file: file.clone(),
            user_id: "evmiles97".to_string(),
            status_text: "first".to_string(),
            status_id: None,
            seq: 1,
        })
        .unwrap();

        run(StatusAction::Update {
            file: file.clone(),
            status_id: "evmiles97_00001".to_string(),
            user_id: "evmiles97".to_string(),
            status_text: "Updated status text".to_string(),
        })
        .unwrap();

        let statuses = load_existing(&file).unwrap();
        assert_eq!(
            statuses.search("evmiles97_00001").status_text,
            "Updated status text"
        );
    }
}
