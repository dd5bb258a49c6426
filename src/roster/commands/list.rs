use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let records = store.load_or_empty()?;
    Ok(CmdResult::default().with_listed_records(records))
}
