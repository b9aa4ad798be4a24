//! Adding and removing tags on a stored note.
//!
//! Both operations take several tags and are all-or-nothing: the changes are
//! applied to a copy of the record, which only replaces the stored one when
//! every tag went through.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::records::RecordStore;

pub fn add<T: AsRef<str>>(records: &mut RecordStore, id: &str, tags: &[T]) -> Result<CmdResult> {
    apply(records, id, tags, |record, tag| record.add_tag(tag), "added to")
}

pub fn remove<T: AsRef<str>>(
    records: &mut RecordStore,
    id: &str,
    tags: &[T],
) -> Result<CmdResult> {
    apply(
        records,
        id,
        tags,
        |record, tag| record.remove_tag(tag),
        "removed from",
    )
}

fn apply<T, F>(
    records: &mut RecordStore,
    id: &str,
    tags: &[T],
    op: F,
    verb: &str,
) -> Result<CmdResult>
where
    T: AsRef<str>,
    F: Fn(&mut Record, &str) -> Result<()>,
{
    let stored = records.find_mut(id)?;
    let mut updated = stored.clone();
    for tag in tags {
        op(&mut updated, tag.as_ref())?;
    }
    *stored = updated.clone();

    let mut result = CmdResult::default();
    for tag in tags {
        result.add_message(CmdMessage::success(format!(
            "Tag {} {} note {}",
            tag.as_ref(),
            verb,
            id
        )));
    }
    Ok(result.with_affected_records(vec![updated]))
}
