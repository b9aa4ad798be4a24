use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;

pub fn run(records: &RecordStore) -> Result<CmdResult> {
    let listed: Vec<_> = records.iter().cloned().collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No notes yet."));
    }
    Ok(result.with_listed_records(listed))
}
