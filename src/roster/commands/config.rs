use crate::commands::{CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub const KEYS: &[&str] = &["data-file", "indent", "log-to-file"];

pub fn run(root: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RosterConfig::load(root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            check_key(&key)?;
        }
        ConfigAction::Set(key, value) => {
            check_key(&key)?;
            match key.as_str() {
                "data-file" => config.set_data_file(&value)?,
                "indent" => config.set_indent(&value)?,
                _ => config.set_log_to_file(&value)?,
            }
            config.save(root)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

pub fn value_of(config: &RosterConfig, key: &str) -> Option<String> {
    match key {
        "data-file" => Some(config.data_file.clone()),
        "indent" => Some(config.indent.to_string()),
        "log-to-file" => Some(config.log_to_file.to_string()),
        _ => None,
    }
}

fn check_key(key: &str) -> Result<()> {
    if KEYS.contains(&key) {
        Ok(())
    } else {
        Err(RosterError::Config(format!(
            "unknown key '{}' (expected one of: {})",
            key,
            KEYS.join(", ")
        )))
    }
}
