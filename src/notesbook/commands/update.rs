use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;

/// Replaces the text of note `id`, keeping its id and tags.
pub fn run(records: &mut RecordStore, id: &str, body: &str) -> Result<CmdResult> {
    let record = records.find_mut(id)?;
    record.set_body(body)?;
    let updated = record.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note updated: {}", id)));
    Ok(result.with_affected_records(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::Record;

    #[test]
    fn replaces_body_only() {
        let mut records = RecordStore::new();
        records.add(Record::restore("4", "old", ["#keep"]).unwrap());

        run(&mut records, "4", "new").unwrap();
        let record = records.find("4").unwrap();
        assert_eq!(record.body(), "new");
        assert_eq!(record.tags(), &["#keep"]);
    }

    #[test]
    fn invalid_body_keeps_old_text() {
        let mut records = RecordStore::new();
        records.add(Record::restore("4", "old", Vec::<&str>::new()).unwrap());

        let err = run(&mut records, "4", &"x".repeat(301)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(records.find("4").unwrap().body(), "old");
    }
}
