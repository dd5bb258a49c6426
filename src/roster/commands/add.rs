use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentRecord;
use crate::store::DataStore;
use tracing::{error, info, warn};

pub fn run<S: DataStore>(
    store: &mut S,
    student_id: i64,
    name: String,
    age: u32,
    grade: String,
) -> Result<CmdResult> {
    let mut records = store.load()?.unwrap_or_else(|| {
        warn!("existing records file not found, starting a new one");
        Vec::new()
    });
    let record = StudentRecord::new(student_id, name, age, grade);
    records.push(record.clone());

    if let Err(e) = store.save(&records) {
        error!(student_id, error = %e, "failed to add record");
        return Err(e);
    }
    info!(student_id, total = records.len(), "record added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {} {}",
        record.student_id, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}
