//! # CLI Layer
//!
//! One client of the roster library. This is the only place that reads the
//! environment, prints to the terminal, or decides exit codes.
//!
//! - `run()`: parse, then log any failure before handing it to `main`
//! - `execute()`: resolve the storage directory, set up logging, dispatch
//! - `handle_*()`: call the API and print the `CmdResult`
//!
//! Text arguments (ids, ages) arrive as strings and are validated here, so a
//! bad age is a clear `Invalid input` error rather than a clap usage dump.

use super::print::{print_config, print_messages, print_records, print_stats};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{ConfigAction, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::logging::init_logging;
use roster::model::UpdateField;
use roster::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{debug, error};

const HOME_ENV: &str = "ROSTER_HOME";
const PROJECT_DIR: &str = ".roster";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let result = execute(cli);
    if let Err(e) = &result {
        error!(error = %e, "command failed");
    }
    result
}

fn execute(cli: Cli) -> Result<()> {
    let root = storage_root(cli.global)?;
    let config = RosterConfig::load(&root)?;
    let log_dir = config.log_to_file.then_some(root.as_path());
    init_logging(cli.verbose, log_dir)?;
    debug!(root = %root.display(), "using storage directory");

    let mut api = RosterApi::open(&root)?;

    match cli.command {
        Some(Commands::Add {
            student_id,
            name,
            age,
            grade,
        }) => handle_add(&mut api, &student_id, name, &age, grade),
        Some(Commands::Search { term }) => handle_search(&api, &term),
        Some(Commands::Update {
            student_id,
            field,
            value,
        }) => handle_update(&mut api, &student_id, &field, &value),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Stats) => handle_stats(&api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
    }
}

/// `ROSTER_HOME` wins, then `--global`, then `./.roster`.
fn storage_root(global: bool) -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    if global {
        let dirs = ProjectDirs::from("com", "roster", "roster").ok_or_else(|| {
            RosterError::Config("could not determine the user data directory".to_string())
        })?;
        return Ok(dirs.data_dir().to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(RosterError::Io)?;
    Ok(cwd.join(PROJECT_DIR))
}

fn handle_add(
    api: &mut RosterApi<FileStore>,
    student_id: &str,
    name: String,
    age: &str,
    grade: String,
) -> Result<()> {
    let student_id = parse_student_id(student_id)?;
    let age = parse_age(age)?;
    let result = api.add_student(student_id, name, age, grade)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &RosterApi<FileStore>, term: &str) -> Result<()> {
    let result = api.search_student(term)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    api: &mut RosterApi<FileStore>,
    student_id: &str,
    field: &str,
    value: &str,
) -> Result<()> {
    let student_id = parse_student_id(student_id)?;
    let field: UpdateField = field.parse()?;
    let result = api.update_student(field, value, student_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &RosterApi<FileStore>) -> Result<()> {
    let result = api.list_students()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(api: &RosterApi<FileStore>) -> Result<()> {
    let result = api.age_stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &RosterApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let showing = !matches!(action, ConfigAction::Set(..));

    let result = api.config(action)?;
    if showing {
        if let Some(config) = &result.config {
            print_config(config, key.as_deref());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_student_id(s: &str) -> Result<i64> {
    s.trim().parse().map_err(|_| {
        RosterError::Validation(format!("student id must be a whole number, got '{}'", s))
    })
}

fn parse_age(s: &str) -> Result<u32> {
    s.trim().parse().map_err(|_| {
        RosterError::Validation(format!(
            "age must be a non-negative whole number, got '{}'",
            s
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_numeric_inputs() {
        assert_eq!(parse_student_id(" 42 ").unwrap(), 42);
        assert!(matches!(
            parse_student_id("abc"),
            Err(RosterError::Validation(_))
        ));
        assert_eq!(parse_age("20").unwrap(), 20);
        assert!(matches!(parse_age("twenty"), Err(RosterError::Validation(_))));
        assert!(matches!(parse_age("-1"), Err(RosterError::Validation(_))));
    }
}
