use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A student's age as found on disk.
///
/// Records created through `add` always carry `Years`. `Text` exists because
/// updating `age` with a value that is not all digits stores it verbatim.
/// Any integer JSON number loads as `Years`, negative or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Years(i64),
    Text(String),
}

impl Age {
    pub fn years(&self) -> Option<i64> {
        match self {
            Age::Years(n) => Some(*n),
            Age::Text(_) => None,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Years(n) => write!(f, "{}", n),
            Age::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Age::Years(i64::from(years))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: i64,
    pub name: String,
    pub age: Age,
    pub grade: String,
    // Keys we don't model are carried through rewrites untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StudentRecord {
    pub fn new(
        student_id: i64,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            student_id,
            name: name.into(),
            age: Age::from(age),
            grade: grade.into(),
            extra: Map::new(),
        }
    }

    /// Loose match: exact id as text, or case-insensitive substring of the name.
    pub fn matches(&self, term: &str) -> bool {
        self.student_id.to_string() == term
            || self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Fields that may be changed by an update. `student_id` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Name,
    Age,
    Grade,
}

impl UpdateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateField::Name => "name",
            UpdateField::Age => "age",
            UpdateField::Grade => "grade",
        }
    }
}

impl fmt::Display for UpdateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(UpdateField::Name),
            "age" => Ok(UpdateField::Age),
            "grade" => Ok(UpdateField::Grade),
            "student_id" | "id" => Err(RosterError::ImmutableField),
            _ => Err(RosterError::UnknownField(s.to_string())),
        }
    }
}
