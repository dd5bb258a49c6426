use crate::error::{Result, RosterError};
use crate::store::fs::DEFAULT_INDENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "data.json";
const MAX_INDENT: usize = 16;

/// Configuration for roster, stored in .roster/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// File name of the records array, relative to the storage directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Spaces of indentation when writing records (0 = compact)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Also append diagnostics to log.txt in the storage directory
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            indent: default_indent(),
            log_to_file: false,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_file)
    }

    pub fn set_data_file(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(RosterError::Validation(format!(
                "data-file must be a plain file name, got '{}'",
                name
            )));
        }
        self.data_file = name.to_string();
        Ok(())
    }

    pub fn set_indent(&mut self, value: &str) -> Result<()> {
        let indent: usize = value.trim().parse().map_err(|_| {
            RosterError::Validation(format!("indent must be a whole number, got '{}'", value))
        })?;
        if indent > MAX_INDENT {
            return Err(RosterError::Validation(format!(
                "indent must be at most {}",
                MAX_INDENT
            )));
        }
        self.indent = indent;
        Ok(())
    }

    pub fn set_log_to_file(&mut self, value: &str) -> Result<()> {
        self.log_to_file = match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            other => {
                return Err(RosterError::Validation(format!(
                    "log-to-file must be true or false, got '{}'",
                    other
                )))
            }
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.data_file, "data.json");
        assert_eq!(config.indent, 4);
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.set_indent("2").unwrap();
        config.set_data_file("students.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.indent, 2);
        assert_eq!(loaded.data_path(dir.path()), dir.path().join("students.json"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"indent": 0}"#).unwrap();
        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.indent, 0);
        assert_eq!(loaded.data_file, "data.json");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = RosterConfig::default();
        assert!(config.set_indent("lots").is_err());
        assert!(config.set_indent("17").is_err());
        assert!(config.set_data_file("../escape.json").is_err());
        assert!(config.set_data_file("").is_err());
        assert!(config.set_log_to_file("maybe").is_err());
        assert_eq!(config, RosterConfig::default());
    }
}
