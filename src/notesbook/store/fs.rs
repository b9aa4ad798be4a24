use super::DataStore;
use crate::error::{NotesError, Result};
use crate::records::RecordStore;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(NotesError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("notes");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<RecordStore> {
        if !self.path.exists() {
            debug!("no notes file at {}, starting empty", self.path.display());
            return Ok(RecordStore::new());
        }

        let content = fs::read_to_string(&self.path).map_err(NotesError::Io)?;
        let data: Value = serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        let records = RecordStore::from_value(&data)?;
        info!(
            "loaded {} notes from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&mut self, records: &RecordStore) -> Result<()> {
        self.ensure_parent()?;

        let data = Value::Object(records.to_mapping());
        let content = serde_json::to_string_pretty(&data).map_err(NotesError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(NotesError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(NotesError::Io(e));
        }

        info!("saved {} notes to {}", records.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::id::IdGenerator;
    use crate::model::Record;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data_note.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let (_dir, mut store) = setup();
        let ids = IdGenerator::new();
        let mut records = RecordStore::new();
        records.add(Record::with_tags(&ids, "hello I'm the first note", ["#inc", "#text"]).unwrap());
        records.add(Record::with_tags(&ids, "hello I'm the second note", ["#digit"]).unwrap());

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.find("1").unwrap().tags(), &["#inc", "#text"]);
        assert_eq!(loaded.find("2").unwrap().body(), "hello I'm the second note");
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::new(nested.join("notes.json"));

        store.save(&RecordStore::new()).unwrap();
        assert!(nested.join("notes.json").exists());

        for entry in fs::read_dir(&nested).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("notes.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), "x").unwrap();
        let mut store = FileStore::new(&target);

        let err = store.save(&RecordStore::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "leftover tmp files: {:?}", leftovers);
    }

    #[test]
    fn reads_hand_written_file() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            r##"{"5": {"Tags": ["#x"], "Note": "written by hand"}}"##,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.find("5").unwrap().body(), "written by hand");
    }

    #[test]
    fn invalid_json_is_serialization_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.load().unwrap_err().kind(), ErrorKind::Serialization);
    }

    #[test]
    fn non_object_json_is_type_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert_eq!(store.load().unwrap_err().kind(), ErrorKind::Type);
    }
}
