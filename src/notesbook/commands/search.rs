use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;

pub fn run(records: &RecordStore, tag: &str) -> Result<CmdResult> {
    let listed: Vec<_> = records.find_by_tag(tag)?.into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes tagged {}", tag)));
    }
    Ok(result.with_listed_records(listed))
}
