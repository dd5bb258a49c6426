use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{Age, StudentRecord, UpdateField};
use crate::store::DataStore;
use tracing::{error, info, warn};

/// Applies one field change to the first record with `student_id`.
///
/// Nothing is written when storage is missing or no record matches; the
/// result then has no affected records and carries a warning.
pub fn run<S: DataStore>(
    store: &mut S,
    field: UpdateField,
    value: &str,
    student_id: i64,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(mut records) = store.load()? else {
        warn!(student_id, "update skipped, records file not found");
        result.add_message(CmdMessage::warning(
            "No records stored yet; nothing updated.",
        ));
        return Ok(result);
    };

    let Some(record) = records.iter_mut().find(|r| r.student_id == student_id) else {
        warn!(student_id, "update skipped, no such student");
        result.add_message(CmdMessage::warning(format!(
            "No student with id {}; nothing updated.",
            student_id
        )));
        return Ok(result);
    };

    apply(record, field, value)?;
    let updated = record.clone();
    if let Err(e) = store.save(&records) {
        error!(student_id, field = %field, error = %e, "failed to update record");
        return Err(e);
    }
    info!(student_id, field = %field, "record updated");

    result.add_message(CmdMessage::success(format!(
        "Student {} updated: {} = {}",
        student_id, field, value
    )));
    Ok(result.with_affected_records(vec![updated]))
}

fn apply(record: &mut StudentRecord, field: UpdateField, value: &str) -> Result<()> {
    match field {
        UpdateField::Name => record.name = value.to_string(),
        UpdateField::Grade => record.grade = value.to_string(),
        UpdateField::Age => record.age = parse_age(value)?,
    }
    Ok(())
}

/// Values made only of ASCII digits `0-9` become a number; anything else,
/// including other scripts' decimal digits such as `"٣"`, is kept as text.
fn parse_age(value: &str) -> Result<Age> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Age::Text(value.to_string()));
    }
    value
        .parse::<i64>()
        .map(Age::Years)
        .map_err(|_| RosterError::Validation(format!("age {} is out of range", value)))
}
