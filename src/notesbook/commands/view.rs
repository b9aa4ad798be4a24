use crate::commands::CmdResult;
use crate::error::Result;
use crate::records::RecordStore;

pub fn run<I: AsRef<str>>(records: &RecordStore, ids: &[I]) -> Result<CmdResult> {
    let listed = ids
        .iter()
        .map(|id| records.find(id.as_ref()).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_records(listed))
}
