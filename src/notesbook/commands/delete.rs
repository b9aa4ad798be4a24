use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;

/// Deletes every note in `ids`. Nothing is removed unless all of them exist.
pub fn run<I: AsRef<str>>(records: &mut RecordStore, ids: &[I]) -> Result<CmdResult> {
    for id in ids {
        records.find(id.as_ref())?;
    }

    let mut result = CmdResult::default();
    for id in ids {
        let removed = records.delete(id.as_ref())?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted: {}",
            removed.id()
        )));
        result.affected_records.push(removed);
    }
    Ok(result)
}
