use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use uuid::Uuid;

pub const DEFAULT_INDENT: usize = 4;

/// Records persisted as a JSON array in a single file.
pub struct FileStore {
    data_file: PathBuf,
    indent: usize,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Number of spaces used when pretty-printing. Zero writes compact JSON.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }

    fn encode(&self, records: &[StudentRecord]) -> Result<Vec<u8>> {
        if self.indent == 0 {
            return serde_json::to_vec(records).map_err(RosterError::Serialization);
        }
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        records
            .serialize(&mut ser)
            .map_err(RosterError::Serialization)?;
        Ok(buf)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Vec<StudentRecord>>> {
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "records file not found");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(RosterError::Io)?;
        let records: Vec<StudentRecord> =
            serde_json::from_str(&content).map_err(|source| {
                error!(path = %self.data_file.display(), error = %source, "records file is malformed");
                RosterError::Corrupt {
                    path: self.data_file.clone(),
                    source,
                }
            })?;
        debug!(path = %self.data_file.display(), count = records.len(), "loaded records");
        Ok(Some(records))
    }

    fn save(&mut self, records: &[StudentRecord]) -> Result<()> {
        self.ensure_parent()?;
        let content = self.encode(records)?;

        // Write next to the target then rename, so readers never see a half-written array
        let dir = self
            .data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let tmp_file = dir.join(format!(".records-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RosterError::Io(e));
        }

        debug!(path = %self.data_file.display(), count = records.len(), "saved records");
        Ok(())
    }
}
