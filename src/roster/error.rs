use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Records file {} is not a valid list of students: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("student_id cannot be updated")]
    ImmutableField,

    #[error("Unknown field: {0} (expected one of: name, age, grade)")]
    UnknownField(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
