use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::model::Record;
use crate::records::RecordStore;

pub fn run(
    records: &mut RecordStore,
    ids: &IdGenerator,
    body: &str,
    tags: &[String],
) -> Result<CmdResult> {
    let record = Record::with_tags(ids, body, tags)?;
    records.add(record.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        record.id()
    )));
    Ok(result.with_affected_records(vec![record]))
}
