use crate::config::RosterConfig;
use crate::model::StudentRecord;

pub mod add;
pub mod config;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

pub use stats::AgeStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records written by this command, as stored
    pub affected_records: Vec<StudentRecord>,
    /// Records returned for display, in collection order
    pub listed_records: Vec<StudentRecord>,
    pub stats: Option<AgeStats>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// True iff the command persisted a change.
    pub fn changed(&self) -> bool {
        !self.affected_records.is_empty()
    }

    pub fn with_affected_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_stats(mut self, stats: AgeStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
