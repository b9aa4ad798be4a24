use crate::error::{NotesError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NOTES_FILE: &str = "data_note.json";
const NOTES_FILE_EXT: &str = ".json";

/// CLI key for [`NotesConfig::notes_file`].
pub const NOTES_FILE_KEY: &str = "notes-file";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "NOTESBOOK_HOME";

/// Configuration for the notes book, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Name of the notes file inside the data directory
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotesError::Serialization)?;
        fs::write(config_path, content).map_err(NotesError::Io)?;
        Ok(())
    }

    /// Set the notes file name (normalizes to end with `.json`)
    pub fn set_notes_file(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() || name.contains(&['/', '\\'][..]) {
            return Err(NotesError::Value(format!(
                "notes file must be a plain file name, got {:?}",
                name
            )));
        }
        if name.ends_with(NOTES_FILE_EXT) {
            self.notes_file = name.to_string();
        } else {
            self.notes_file = format!("{}{}", name, NOTES_FILE_EXT);
        }
        Ok(())
    }

    /// Look up a value by its CLI key (e.g. `notes-file`)
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            NOTES_FILE_KEY => Some(self.notes_file.clone()),
            _ => None,
        }
    }

    /// Set a value by its CLI key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            NOTES_FILE_KEY => self.set_notes_file(value),
            other => Err(NotesError::NotFound(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }

    pub fn notes_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.notes_file)
    }
}

/// Resolve the data directory: `$NOTESBOOK_HOME`, else the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "notesbook", "notesbook")
        .ok_or_else(|| NotesError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
